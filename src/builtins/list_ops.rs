//! Q-expression manipulation: `list head tail join eval`.

use super::{arity_invalid, empty_collection, type_error};
use crate::env::Environment;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

/// Retypes the already-evaluated argument bundle as a Q-expression, taking
/// any number of arguments including zero.
pub fn builtin_list(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    Value::QExpr(args)
}

/// Returns a single-element Q-expression holding the first element.
pub fn builtin_head(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_invalid("head", args.len(), "1");
    }
    match args.remove(0) {
        Value::QExpr(mut items) => {
            if items.is_empty() {
                empty_collection("head")
            } else {
                Value::QExpr(vec![items.remove(0)])
            }
        }
        other => type_error("head", &other, "Q-Expression"),
    }
}

/// Returns every element but the first.
pub fn builtin_tail(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_invalid("tail", args.len(), "1");
    }
    match args.remove(0) {
        Value::QExpr(mut items) => {
            if items.is_empty() {
                empty_collection("tail")
            } else {
                items.remove(0);
                Value::QExpr(items)
            }
        }
        other => type_error("tail", &other, "Q-Expression"),
    }
}

/// Concatenates one or more Q-expressions in argument order.
pub fn builtin_join(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return arity_invalid("join", 0, "at least 1");
    }
    let mut result = Vec::new();
    for arg in args {
        match arg {
            Value::QExpr(items) => result.extend(items),
            other => return type_error("join", &other, "Q-Expression"),
        }
    }
    Value::QExpr(result)
}

/// Retypes a Q-expression as an S-expression and evaluates it.
pub fn builtin_eval(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_invalid("eval", args.len(), "1");
    }
    match args.remove(0) {
        Value::QExpr(items) => eval(env, Value::SExpr(items)),
        other => type_error("eval", &other, "Q-Expression"),
    }
}

pub fn register(env: &Rc<Environment>) {
    env.put("list", Value::builtin("list", builtin_list));
    env.put("head", Value::builtin("head", builtin_head));
    env.put("tail", Value::builtin("tail", builtin_tail));
    env.put("join", Value::builtin("join", builtin_join));
    env.put("eval", Value::builtin("eval", builtin_eval));
}
