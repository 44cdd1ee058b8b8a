mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod parser;
mod value;

use builtins::register_builtins;
use clap::Parser;
use config::{PROMPT, WELCOME_MESSAGE};
use env::Environment;
use error::ReplError;
use eval::eval;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::path::PathBuf;
use std::rc::Rc;

/// An interactive interpreter for a small Lisp-family expression language
#[derive(Parser, Debug)]
#[command(name = "meowlisp")]
#[command(version = config::VERSION)]
#[command(about = "Meowlisp: a tiny curried Lisp")]
struct CliArgs {
    /// Script file to execute (optional — if not provided, starts the REPL)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let env = Environment::new();
    register_builtins(&env);

    if let Some(script_path) = args.script {
        run_script(&script_path, &env)?;
        return Ok(());
    }

    run_repl(&env)
}

fn run_script(path: &PathBuf, env: &Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path).map_err(|e| ReplError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let forms = parser::parse_program(&contents)?;
    for form in forms {
        let result = eval(env, form);
        if let value::Value::Err(msg) = &result {
            eprintln!("Error: {}", msg);
        }
    }
    Ok(())
}

fn run_repl(env: &Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl = DefaultEditor::with_config(config)?;

    let history_file = ".meowlisp_history";
    let _ = rl.load_history(history_file);

    println!("{}", WELCOME_MESSAGE);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => match parser::parse_line(&line) {
                Ok(expr) => {
                    println!("{}", eval(env, expr));
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
    Ok(())
}
