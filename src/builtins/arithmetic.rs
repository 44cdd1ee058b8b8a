//! Arithmetic: `+ - * / %` over `Value::Num(i64)`.
//!
//! All five share one fold-left dispatcher, mirroring the original
//! interpreter's single `builtin_op` entry point: pop the first operand as
//! the accumulator, then fold the rest in with the named operator. `-`
//! negates in place of folding when called with exactly one operand.

use super::{arity_invalid, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn builtin_op(name: &str, mut args: Vec<Value>) -> Value {
    if args.is_empty() {
        return arity_invalid(name, 0, "at least 1");
    }
    for arg in &args {
        if !matches!(arg, Value::Num(_)) {
            return type_error(name, arg, "Number");
        }
    }

    let mut acc = match args.remove(0) {
        Value::Num(n) => n,
        _ => unreachable!(),
    };

    if name == "-" && args.is_empty() {
        return Value::Num(-acc);
    }

    for arg in args {
        let n = match arg {
            Value::Num(n) => n,
            _ => unreachable!(),
        };
        match name {
            "+" => acc = acc.wrapping_add(n),
            "-" => acc = acc.wrapping_sub(n),
            "*" => acc = acc.wrapping_mul(n),
            "/" => {
                if n == 0 {
                    return Value::err("Division by Zero!");
                }
                acc = acc.wrapping_div(n);
            }
            "%" => {
                if n == 0 {
                    return Value::err("Division (mod) by Zero!");
                }
                acc = acc.wrapping_rem(n);
            }
            _ => unreachable!(),
        }
    }
    Value::Num(acc)
}

pub fn builtin_add(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op("+", args)
}

pub fn builtin_sub(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op("-", args)
}

pub fn builtin_mul(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op("*", args)
}

pub fn builtin_div(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op("/", args)
}

pub fn builtin_mod(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op("%", args)
}

pub fn register(env: &Rc<Environment>) {
    env.put("+", Value::builtin("+", builtin_add));
    env.put("-", Value::builtin("-", builtin_sub));
    env.put("*", Value::builtin("*", builtin_mul));
    env.put("/", Value::builtin("/", builtin_div));
    env.put("%", Value::builtin("%", builtin_mod));
}
