//! # Built-in Functions Module
//!
//! Core built-in functions for the Meowlisp language, organized into 4
//! categories with 11 total functions.
//!
//! ## Categories
//!
//! - **[arithmetic]** (5): `+`, `-`, `*`, `/`, `%` — numeric operations
//! - **[list_ops]** (4): `list`, `head`, `tail`, `join`, plus `eval` — Q-expression manipulation
//! - **[binding]** (2): `def`, `=` — global and local definition
//! - **[lambda]** (1): `\` — lambda construction

use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub mod arithmetic;
pub mod binding;
pub mod lambda;
pub mod list_ops;

/// Registers every built-in in `env`, which is expected to be the root
/// environment (builtins are installed via a plain local `put`, since the
/// root has no parent for `def` to walk past anyway).
pub fn register_builtins(env: &Rc<Environment>) {
    arithmetic::register(env);
    list_ops::register(env);
    binding::register(env);
    lambda::register(env);
}

/// "Function 'NAME' passed incorrect types! Got GOT, Expected EXPECTED."
pub(crate) fn type_error(name: &str, got: &Value, expected: &str) -> Value {
    Value::err(format!(
        "Function '{}' passed incorrect types! Got {}, Expected {}.",
        name,
        got.type_name(),
        expected
    ))
}

/// "Function 'NAME' passed too many arguments. Got GOT, Expected EXPECTED."
pub(crate) fn arity_too_many(name: &str, got: usize, expected: &str) -> Value {
    Value::err(format!(
        "Function '{}' passed too many arguments. Got {}, Expected {}.",
        name, got, expected
    ))
}

/// "Function 'NAME' passed invalid number of arguments. Got GOT, Expected EXPECTED."
pub(crate) fn arity_invalid(name: &str, got: usize, expected: &str) -> Value {
    Value::err(format!(
        "Function '{}' passed invalid number of arguments. Got {}, Expected {}.",
        name, got, expected
    ))
}

/// "Function 'NAME' passed {}!" — the empty-collection case for `head`/`tail`.
pub(crate) fn empty_collection(name: &str) -> Value {
    Value::err(format!("Function '{}' passed {{}}!", name))
}
