//! Lambda construction: `\`.

use super::type_error;
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// `(\ {formals} {body})` — both arguments must be Q-expressions, and every
/// formal must be a symbol. Placement of `&` within the formals is not
/// validated here; it is checked lazily at application time.
pub fn builtin_lambda(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return super::arity_invalid("\\", args.len(), "2");
    }

    let formals_val = args.remove(0);
    let body_val = args.remove(0);

    let formals = match formals_val {
        Value::QExpr(items) => items,
        other => return type_error("\\", &other, "Q-Expression"),
    };
    for formal in &formals {
        if !matches!(formal, Value::Sym(_)) {
            return type_error("\\", formal, "Symbol");
        }
    }

    let body = match body_val {
        Value::QExpr(items) => items,
        other => return type_error("\\", &other, "Q-Expression"),
    };

    Value::lambda(formals, body)
}

pub fn register(env: &Rc<Environment>) {
    env.put("\\", Value::builtin("\\", builtin_lambda));
}
