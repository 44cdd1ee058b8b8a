// ABOUTME: The evaluator — S-expression reduction and function application

use crate::env::Environment;
use crate::value::{Function, Lambda, Value};
use std::rc::Rc;

/// Reduces a value to normal form: symbols look themselves up, S-expressions
/// reduce, everything else is self-evaluating.
pub fn eval(env: &Rc<Environment>, v: Value) -> Value {
    match v {
        Value::Sym(s) => env
            .get(&s)
            .unwrap_or_else(|| Value::err(format!("unbound symbol '{}'", s))),
        Value::SExpr(items) => eval_sexpr(env, items),
        other => other,
    }
}

fn eval_sexpr(env: &Rc<Environment>, items: Vec<Value>) -> Value {
    let mut evaluated: Vec<Value> = items.into_iter().map(|child| eval(env, child)).collect();

    if let Some(pos) = evaluated.iter().position(Value::is_err) {
        return evaluated.swap_remove(pos);
    }

    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }

    if evaluated.len() == 1 {
        return evaluated.remove(0);
    }

    let head = evaluated.remove(0);
    let fun = match head {
        Value::Fun(f) => f,
        other => {
            return Value::err(format!(
                "first element is not a function! Got {}, Expected Function",
                other.type_name()
            ))
        }
    };

    apply(env, fun, evaluated)
}

/// Applies a function value to an already-evaluated argument bundle.
pub fn apply(env: &Rc<Environment>, f: Function, args: Vec<Value>) -> Value {
    match f {
        Function::Builtin(b) => (b.func)(env, args),
        Function::Lambda(lam) => apply_lambda(env, lam, args),
    }
}

fn sym_name(v: Value) -> String {
    match v {
        Value::Sym(s) => s,
        // Formals are validated to be symbols at lambda construction time (§4.4).
        _ => unreachable!("lambda formal was not a symbol"),
    }
}

fn apply_lambda(calling_env: &Rc<Environment>, mut lam: Lambda, mut args: Vec<Value>) -> Value {
    let given = args.len();
    let total = lam.formals.len();

    while !args.is_empty() {
        if lam.formals.is_empty() {
            return Value::err(format!(
                "Function passed too many arguments. Got {}, Expected {}.",
                given, total
            ));
        }

        let formal = lam.formals.remove(0);
        if matches!(&formal, Value::Sym(s) if s == "&") {
            if lam.formals.len() != 1 {
                return Value::err(
                    "Function format invalid. Symbol '&' not followed by single symbol.",
                );
            }
            let rest_name = sym_name(lam.formals.remove(0));
            lam.env
                .put(&rest_name, Value::QExpr(args.drain(..).collect()));
            break;
        }

        let value = args.remove(0);
        lam.env.put(&sym_name(formal), value);
    }

    // Rest-parameter declared but no arguments left to feed it.
    if matches!(lam.formals.first(), Some(Value::Sym(s)) if s == "&") {
        if lam.formals.len() != 2 {
            return Value::err(
                "Function format invalid. Symbol '&' not followed by single symbol.",
            );
        }
        lam.formals.remove(0);
        let rest_name = sym_name(lam.formals.remove(0));
        lam.env.put(&rest_name, Value::QExpr(Vec::new()));
    }

    if lam.formals.is_empty() {
        lam.env.set_parent(Rc::clone(calling_env));
        eval(&lam.env, Value::SExpr(lam.body))
    } else {
        Value::Fun(Function::Lambda(lam))
    }
}
