// ABOUTME: Value types representing Meowlisp data and expressions

use crate::env::Environment;
use std::fmt;
use std::rc::Rc;

/// A built-in's native implementation: takes the calling environment and the
/// already-evaluated argument bundle, returns a freshly owned result.
pub type BuiltinFn = fn(&Rc<Environment>, Vec<Value>) -> Value;

#[derive(Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Lambda {
    pub formals: Vec<Value>,
    pub body: Vec<Value>,
    pub env: Rc<Environment>,
}

#[derive(Debug, Clone)]
pub enum Function {
    Builtin(Builtin),
    Lambda(Lambda),
}

#[derive(Debug, Clone)]
pub enum Value {
    Num(i64),
    Err(String),
    Sym(String),
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
    Fun(Function),
}

impl Value {
    pub fn num(n: i64) -> Value {
        Value::Num(n)
    }

    pub fn err(msg: impl Into<String>) -> Value {
        Value::Err(msg.into())
    }

    pub fn sym(name: impl Into<String>) -> Value {
        Value::Sym(name.into())
    }

    pub fn sexpr() -> Value {
        Value::SExpr(Vec::new())
    }

    pub fn qexpr() -> Value {
        Value::QExpr(Vec::new())
    }

    pub fn builtin(name: &'static str, func: BuiltinFn) -> Value {
        Value::Fun(Function::Builtin(Builtin { name, func }))
    }

    pub fn lambda(formals: Vec<Value>, body: Vec<Value>) -> Value {
        Value::Fun(Function::Lambda(Lambda {
            formals,
            body,
            env: Environment::new(),
        }))
    }

    /// Structural equality, ignoring the identity of any captured environment.
    /// Used by tests that check currying/round-trip behavior.
    pub fn structurally_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Num(a), Value::Num(b)) => a == b,
            (Value::Err(a), Value::Err(b)) => a == b,
            (Value::Sym(a), Value::Sym(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) | (Value::QExpr(a), Value::QExpr(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structurally_eq(y))
            }
            (Value::Fun(Function::Builtin(a)), Value::Fun(Function::Builtin(b))) => {
                a.name == b.name
            }
            (Value::Fun(Function::Lambda(a)), Value::Fun(Function::Lambda(b))) => {
                a.formals.len() == b.formals.len()
                    && a.formals
                        .iter()
                        .zip(&b.formals)
                        .all(|(x, y)| x.structurally_eq(y))
                    && a.body.len() == b.body.len()
                    && a.body.iter().zip(&b.body).all(|(x, y)| x.structurally_eq(y))
            }
            _ => false,
        }
    }

    /// Human-readable tag name, used in error text.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Num(_) => "Number",
            Value::Err(_) => "Error",
            Value::Sym(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Fun(_) => "Function",
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Value::Err(_))
    }
}

fn print_expr(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{}", n),
            Value::Err(msg) => write!(f, "Error: {}", msg),
            Value::Sym(s) => write!(f, "{}", s),
            Value::SExpr(items) => print_expr(f, items, '(', ')'),
            Value::QExpr(items) => print_expr(f, items, '{', '}'),
            Value::Fun(Function::Builtin(_)) => write!(f, "<function>"),
            Value::Fun(Function::Lambda(lam)) => {
                write!(f, "(\\ ")?;
                print_expr(f, &lam.formals, '{', '}')?;
                write!(f, " ")?;
                print_expr(f, &lam.body, '{', '}')?;
                write!(f, ")")
            }
        }
    }
}
