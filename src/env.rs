// ABOUTME: Environment module for managing nested variable bindings

use crate::value::{Function, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Name-to-value mapping with an optional parent. Bindings are kept in an
/// ordered vector rather than a hash map: insertion order is the only order
/// that matters for lookup (names are unique per scope, so first match is
/// the only match), and the set of names per scope is small.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<Vec<(String, Value)>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Fresh environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(Vec::new()),
            parent: RefCell::new(None),
        })
    }

    /// Fresh environment with the given parent.
    pub fn child(parent: &Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(Vec::new()),
            parent: RefCell::new(Some(Rc::clone(parent))),
        })
    }

    /// Rebinds this environment's parent in place. Used when applying a
    /// lambda: its captured environment's parent is reset to the calling
    /// environment just before the body is evaluated.
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Looks up `sym`, walking the parent chain. Returns a deep copy so the
    /// caller owns an independent value; `None` means unbound.
    pub fn get(&self, sym: &str) -> Option<Value> {
        if let Some((_, v)) = self.bindings.borrow().iter().find(|(n, _)| n == sym) {
            return Some(deep_copy(v));
        }
        match self.parent.borrow().as_ref() {
            Some(parent) => parent.get(sym),
            None => None,
        }
    }

    /// Insert-or-replace in this scope only (local define, `=`).
    pub fn put(&self, sym: &str, value: Value) {
        let mut bindings = self.bindings.borrow_mut();
        if let Some(slot) = bindings.iter_mut().find(|(n, _)| n == sym) {
            slot.1 = value;
        } else {
            bindings.push((sym.to_string(), value));
        }
    }

    /// Insert-or-replace at the root of the parent chain (global define, `def`).
    pub fn define_global(self: &Rc<Self>, sym: &str, value: Value) {
        let mut current = Rc::clone(self);
        loop {
            let next = current.parent.borrow().clone();
            match next {
                Some(p) => current = p,
                None => break,
            }
        }
        current.put(sym, value);
    }
}

/// Deep copy of every binding in `env`; the parent pointer is preserved as an
/// alias, not itself copied.
pub fn copy_env(env: &Rc<Environment>) -> Rc<Environment> {
    let bindings = env
        .bindings
        .borrow()
        .iter()
        .map(|(n, v)| (n.clone(), deep_copy(v)))
        .collect();
    Rc::new(Environment {
        bindings: RefCell::new(bindings),
        parent: RefCell::new(env.parent.borrow().clone()),
    })
}

/// Deep copy of a value. For built-ins this copies the opaque handle; for
/// lambdas it deep-copies formals, body, and the captured environment.
/// Distinct from `Clone`, which would share a lambda's `Rc<Environment>`
/// pointer instead of copying its bindings.
pub fn deep_copy(value: &Value) -> Value {
    match value {
        Value::Num(n) => Value::Num(*n),
        Value::Err(msg) => Value::Err(msg.clone()),
        Value::Sym(s) => Value::Sym(s.clone()),
        Value::SExpr(items) => Value::SExpr(items.iter().map(deep_copy).collect()),
        Value::QExpr(items) => Value::QExpr(items.iter().map(deep_copy).collect()),
        Value::Fun(Function::Builtin(b)) => Value::Fun(Function::Builtin(b.clone())),
        Value::Fun(Function::Lambda(lam)) => Value::Fun(Function::Lambda(crate::value::Lambda {
            formals: lam.formals.iter().map(deep_copy).collect(),
            body: lam.body.iter().map(deep_copy).collect(),
            env: copy_env(&lam.env),
        })),
    }
}
