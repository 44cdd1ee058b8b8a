// ABOUTME: Reader adapter — parses Meowlisp source text directly into the value tree

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    IResult,
};

use crate::error::ReplError;
use crate::value::Value;

/// The symbol character class of the surface syntax.
fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!&%".contains(c)
}

/// A token matching the symbol class is a number literal iff it is an
/// optional `-` followed by one or more decimal digits and nothing else.
fn is_number_literal(token: &str) -> bool {
    let body = token.strip_prefix('-').unwrap_or(token);
    !body.is_empty() && body.chars().all(|c| c.is_ascii_digit())
}

/// Parses one whitespace-delimited token and classifies it as a number or a
/// symbol. Numeric overflow is not a parse failure: it becomes a read-time
/// `Err` value embedded in the tree, exactly as a malformed arithmetic
/// result would be.
fn parse_atom(input: &str) -> IResult<&str, Value> {
    let (input, text) = take_while1(is_symbol_char)(input)?;
    if is_number_literal(text) {
        match text.parse::<i64>() {
            Ok(n) => Ok((input, Value::Num(n))),
            Err(_) => Ok((input, Value::err(format!("'{}' is an invalid number", text)))),
        }
    } else {
        Ok((input, Value::sym(text)))
    }
}

fn parse_container(input: &str, open: char, close: char) -> IResult<&str, Vec<Value>> {
    let (input, _) = char(open)(input)?;
    let (mut input, _) = multispace0(input)?;

    let mut items = Vec::new();
    loop {
        if let Ok((rest, _)) = char::<_, nom::error::Error<_>>(close)(input) {
            return Ok((rest, items));
        }
        let (rest, expr) = parse_expr(input)?;
        items.push(expr);
        let (rest, _) = multispace0(rest)?;
        input = rest;
    }
}

fn parse_sexpr(input: &str) -> IResult<&str, Value> {
    let (input, items) = parse_container(input, '(', ')')?;
    Ok((input, Value::SExpr(items)))
}

fn parse_qexpr(input: &str) -> IResult<&str, Value> {
    let (input, items) = parse_container(input, '{', '}')?;
    Ok((input, Value::QExpr(items)))
}

/// Dispatches on the leading character: the grammar is unambiguous, so this
/// is a plain LL(1) choice rather than backtracking `alt` — which matters
/// for error reporting, since `alt` would discard the deeper failure
/// position of a partially-read `(`/`{` in favor of the last alternative's
/// shallow one.
fn parse_expr(input: &str) -> IResult<&str, Value> {
    let (input, _) = multispace0(input)?;
    match input.chars().next() {
        Some('(') => parse_sexpr(input),
        Some('{') => parse_qexpr(input),
        _ => parse_atom(input),
    }
}

/// Classifies a position in the source (either leftover trailing input, or
/// the point a nom sub-parser gave up) into the matching `ReplError`.
fn classify(remaining: &str) -> ReplError {
    match remaining.chars().next() {
        None => ReplError::UnexpectedEof,
        Some(')') => ReplError::Unbalanced(')'),
        Some('}') => ReplError::Unbalanced('}'),
        Some(c) => ReplError::UnexpectedChar(c),
    }
}

fn classify_nom_err(err: nom::Err<nom::error::Error<&str>>) -> ReplError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => classify(e.input),
        nom::Err::Incomplete(_) => ReplError::UnexpectedEof,
    }
}

/// Parses exactly one top-level form, erroring on any leftover
/// non-whitespace content. This is the raw grammar entry point — it does
/// not apply `parse_line`'s per-turn `SExpr` wrapping, so it is used to
/// assert the shape the grammar itself produces for a single form.
pub fn parse_value(input: &str) -> Result<Value, ReplError> {
    match parse_expr(input) {
        Ok((rest, value)) => {
            let rest = rest.trim_start();
            if rest.is_empty() {
                Ok(value)
            } else {
                Err(classify(rest))
            }
        }
        Err(e) => Err(classify_nom_err(e)),
    }
}

/// Parses every top-level form on one line of input and wraps them as a
/// single `SExpr`, mirroring the original grammar's root rule
/// (`lispy : /^/ <expr>* /$/`) whose whole match becomes one S-Expression
/// regardless of how many bare tokens it holds — `+ 1 2 3` reads as
/// `(+ 1 2 3)`, and a line of exactly one already-parenthesized form reads
/// as a single-element wrapper that `eval`'s singleton rule unwraps.
pub fn parse_line(input: &str) -> Result<Value, ReplError> {
    let mut remaining = input;
    let mut items = Vec::new();
    loop {
        remaining = remaining.trim_start();
        if remaining.is_empty() {
            return Ok(Value::SExpr(items));
        }
        match parse_expr(remaining) {
            Ok((rest, value)) => {
                items.push(value);
                remaining = rest;
            }
            Err(e) => return Err(classify_nom_err(e)),
        }
    }
}

/// Parses a multi-line script into one value per non-blank line, applying
/// `parse_line`'s per-turn wrapping to each — a script is just a sequence of
/// REPL turns read from a file instead of from stdin.
pub fn parse_program(input: &str) -> Result<Vec<Value>, ReplError> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}
