//! Definition: `def` (global) and `=` (local).

use super::{arity_invalid, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn builtin_bind(name: &str, env: &Rc<Environment>, mut args: Vec<Value>, global: bool) -> Value {
    if args.is_empty() {
        return arity_invalid(name, 0, "at least 1");
    }

    let syms = match args.remove(0) {
        Value::QExpr(items) => items,
        other => return type_error(name, &other, "Q-Expression"),
    };

    let mut names = Vec::with_capacity(syms.len());
    for sym in &syms {
        match sym {
            Value::Sym(n) => names.push(n.clone()),
            other => return type_error(name, other, "Symbol"),
        }
    }

    if names.len() != args.len() {
        return Value::err(format!(
            "Function '{}' cannot define number of values to symbols",
            name
        ));
    }

    for (n, v) in names.into_iter().zip(args.into_iter()) {
        if global {
            env.define_global(&n, v);
        } else {
            env.put(&n, v);
        }
    }

    Value::SExpr(vec![])
}

pub fn builtin_def(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_bind("def", env, args, true)
}

pub fn builtin_put(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_bind("=", env, args, false)
}

pub fn register(env: &Rc<Environment>) {
    env.put("def", Value::builtin("def", builtin_def));
    env.put("=", Value::builtin("=", builtin_put));
}
