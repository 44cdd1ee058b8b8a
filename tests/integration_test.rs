// ABOUTME: Black-box tests driving the parser and evaluator together

use meowlisp::builtins::register_builtins;
use meowlisp::env::Environment;
use meowlisp::eval::eval;
use meowlisp::parser::parse_line;
use meowlisp::value::Value;
use std::rc::Rc;

fn setup() -> Rc<Environment> {
    let env = Environment::new();
    register_builtins(&env);
    env
}

fn run(env: &Rc<Environment>, src: &str) -> Value {
    eval(env, parse_line(src).unwrap())
}

#[test]
fn test_literal_number() {
    let env = setup();
    assert!(matches!(run(&env, "5"), Value::Num(5)));
}

#[test]
fn test_basic_arithmetic() {
    let env = setup();
    assert!(matches!(run(&env, "(+ 1 2 3)"), Value::Num(6)));
    assert!(matches!(run(&env, "(* 2 3 4)"), Value::Num(24)));
    assert!(matches!(run(&env, "(- 10 3 2)"), Value::Num(5)));
    assert!(matches!(run(&env, "(- 5)"), Value::Num(-5)));
}

#[test]
fn test_nested_arithmetic() {
    let env = setup();
    assert!(matches!(run(&env, "(+ 1 (* 2 3) (- 10 4))"), Value::Num(13)));
}

#[test]
fn test_division_by_zero_is_err_value() {
    let env = setup();
    match run(&env, "(/ 10 0)") {
        Value::Err(msg) => assert_eq!(msg, "Division by Zero!"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_list_builtins() {
    let env = setup();
    let head = run(&env, "(head {1 2 3})");
    assert!(head.structurally_eq(&Value::QExpr(vec![Value::Num(1)])));

    let tail = run(&env, "(tail {1 2 3})");
    assert!(tail.structurally_eq(&Value::QExpr(vec![Value::Num(2), Value::Num(3)])));

    let joined = run(&env, "(join {1 2} {3 4})");
    assert!(joined.structurally_eq(&Value::QExpr(vec![
        Value::Num(1),
        Value::Num(2),
        Value::Num(3),
        Value::Num(4)
    ])));

    let listed = run(&env, "(list 1 2 3)");
    assert!(listed.structurally_eq(&Value::QExpr(vec![
        Value::Num(1),
        Value::Num(2),
        Value::Num(3)
    ])));
}

#[test]
fn test_eval_retypes_qexpr() {
    let env = setup();
    assert!(matches!(run(&env, "(eval {+ 1 2})"), Value::Num(3)));
}

#[test]
fn test_def_is_global_across_scopes() {
    let env = setup();
    run(&env, "(def {x} 10)");
    assert!(matches!(run(&env, "x"), Value::Num(10)));
    // visible even from inside a freshly applied lambda's scope
    run(&env, "(def {use-x} (\\ {} {+ x 1}))");
    assert!(matches!(run(&env, "(use-x)"), Value::Num(11)));
}

#[test]
fn test_lambda_and_currying() {
    let env = setup();
    run(&env, "(def {add} (\\ {x y} {+ x y}))");
    assert!(matches!(run(&env, "(add 3 4)"), Value::Num(7)));
    run(&env, "(def {add5} (add 5))");
    assert!(matches!(run(&env, "(add5 1)"), Value::Num(6)));
}

#[test]
fn test_variadic_rest_param() {
    let env = setup();
    let result = run(&env, "((\\ {x & xs} {xs}) 1 2 3)");
    assert!(result.structurally_eq(&Value::QExpr(vec![Value::Num(2), Value::Num(3)])));
}

#[test]
fn test_unbound_symbol_is_err() {
    let env = setup();
    match run(&env, "undefined-name") {
        Value::Err(msg) => assert_eq!(msg, "unbound symbol 'undefined-name'"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_calling_a_non_function_is_err() {
    let env = setup();
    match run(&env, "(1 2 3)") {
        Value::Err(msg) => assert_eq!(
            msg,
            "first element is not a function! Got Number, Expected Function"
        ),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_empty_sexpr_evaluates_to_itself() {
    let env = setup();
    let result = run(&env, "()");
    assert!(result.structurally_eq(&Value::SExpr(vec![])));
}

#[test]
fn test_qexpr_is_self_evaluating() {
    let env = setup();
    let result = run(&env, "{+ 1 2}");
    assert!(result.structurally_eq(&Value::QExpr(vec![
        Value::sym("+"),
        Value::Num(1),
        Value::Num(2)
    ])));
}

#[test]
fn test_error_propagates_through_arithmetic() {
    let env = setup();
    let result = run(&env, "(+ 1 (/ 1 0))");
    assert!(result.is_err());
}

// The spec's scenario table is phrased as bare REPL turns, not
// pre-parenthesized calls — a whole line is read as one implicit
// top-level S-Expression, so `+ 1 2 3` means the same thing as `(+ 1 2 3)`.
mod bare_line_scenarios {
    use super::*;

    #[test]
    fn scenario_1_sum() {
        let env = setup();
        assert!(matches!(run(&env, "+ 1 2 3"), Value::Num(6)));
    }

    #[test]
    fn scenario_3_division_by_zero() {
        let env = setup();
        match run(&env, "/ 10 0") {
            Value::Err(msg) => assert_eq!(msg, "Division by Zero!"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn scenario_4_head() {
        let env = setup();
        let result = run(&env, "head {1 2 3}");
        assert!(result.structurally_eq(&Value::QExpr(vec![Value::Num(1)])));
    }

    #[test]
    fn scenario_5_eval_tail_tail() {
        let env = setup();
        let result = run(&env, "eval (tail {tail tail {5 6 7}})");
        assert!(result.structurally_eq(&Value::QExpr(vec![Value::Num(6), Value::Num(7)])));
    }

    #[test]
    fn scenario_6_def_then_use() {
        let env = setup();
        let def_result = run(&env, "def {x} 100");
        assert!(def_result.structurally_eq(&Value::SExpr(vec![])));
        assert!(matches!(run(&env, "+ x 1"), Value::Num(101)));
    }

    #[test]
    fn scenario_7_inline_lambda() {
        let env = setup();
        assert!(matches!(run(&env, "(\\ {x y} {+ x y}) 3 4"), Value::Num(7)));
    }

    #[test]
    fn scenario_8_add_mul() {
        let env = setup();
        run(&env, "def {add-mul} (\\ {x y} {+ x (* x y)})");
        assert!(matches!(run(&env, "add-mul 10 20"), Value::Num(210)));
    }

    #[test]
    fn scenario_9_currying() {
        let env = setup();
        run(&env, "def {addN} (\\ {x y} {+ x y})");
        run(&env, "def {inc} (addN 1)");
        assert!(matches!(run(&env, "inc 41"), Value::Num(42)));
    }

    #[test]
    fn scenario_10_variadic_with_tail() {
        let env = setup();
        let result = run(&env, "(\\ {x & xs} {xs}) 1 2 3 4");
        assert!(result.structurally_eq(&Value::QExpr(vec![
            Value::Num(2),
            Value::Num(3),
            Value::Num(4)
        ])));
    }

    #[test]
    fn scenario_11_variadic_no_tail() {
        let env = setup();
        let result = run(&env, "(\\ {x & xs} {xs}) 1");
        assert!(result.structurally_eq(&Value::QExpr(vec![])));
    }

    #[test]
    fn scenario_12_unbound_symbol() {
        let env = setup();
        match run(&env, "foo") {
            Value::Err(msg) => assert_eq!(msg, "unbound symbol 'foo'"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn scenario_13_wrong_type() {
        let env = setup();
        match run(&env, "head 5") {
            Value::Err(msg) => assert_eq!(
                msg,
                "Function 'head' passed incorrect types! Got Number, Expected Q-Expression."
            ),
            other => panic!("unexpected {:?}", other),
        }
    }
}
