use std::io::{self, BufRead, Write};

use crate::interpreter::lexer::{Lexer, Token};

/// The prompt printed before each line of input.
pub const PROMPT: &str = ">>";

/// Runs the interactive token printer until end of input.
///
/// Each line read from `input` is tokenized and every token printed on its
/// own line until `EOF`. The literal line `exit` ends the session with a
/// farewell instead. Reader and writer are injected so the loop can be
/// exercised from tests.
///
/// # Errors
/// Returns any I/O error raised while reading input or writing output.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    loop {
        write!(output, "{PROMPT} ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        if line.trim() == "exit" {
            writeln!(output, "bye 👋")?;
            return Ok(());
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token == Token::Eof {
                break;
            }
            writeln!(output, "{token:?}")?;
        }
    }
}
