// ABOUTME: Constants for the REPL's banner, prompt, and version string

pub const VERSION: &str = "0.0.1";

pub const PROMPT: &str = "meowlisp> ";

/// Exact startup banner, reproduced verbatim from the original C REPL.
pub const WELCOME_MESSAGE: &str = "Meowlisp Version 0.0.1\n \\    /\\ \n  )  ( ')\n (  /  ) \n  \\(__)| \nPress Ctrl+c to Exit\n";
