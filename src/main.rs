use std::{fs, io};

use clap::Parser;
use lemur::{interpret, interpreter::value::Value, repl};

/// lemur is a small, dynamically-typed, expression-oriented scripting
/// language with first-class functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lemur to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final
    /// printable value of a lemur script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Script text to run, or a path when --file is given. When omitted,
    /// the interactive token printer starts.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        if let Err(e) = repl::start(&mut stdin.lock(), &mut io::stdout()) {
            eprintln!("{e}");
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match interpret(&script) {
        Ok(value) => {
            if value.is_error() {
                eprintln!("{value}");
            } else if args.pipe_mode && value != Value::Null {
                println!("{value}");
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
