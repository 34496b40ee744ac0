//! Interactive read-parse-print loop.
//!
//! Each line is parsed on its own and echoed back in reconstructed form, which
//! shows how the parser grouped every operator.

use monkey_lexer::tokenize;
use monkey_parser::{parse, ParseError};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::diagnostics::report_parse_errors;

const PROMPT: &str = ">> ";

pub fn run() -> miette::Result<()> {
    println!(
        "Hello, {}! This is the Monkey programming language",
        current_user()
    );
    println!("Type in commands to get started. Use :help for help, :quit or Ctrl+D to exit.");

    let mut rl =
        DefaultEditor::new().map_err(|e| miette::miette!("Failed to create REPL: {}", e))?;
    let mut show_tokens = false;

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(miette::miette!("Failed to read line: {}", e)),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        match trimmed {
            ":quit" | ":q" => break,
            ":help" | ":h" => print_help(),
            ":tokens" => {
                show_tokens = !show_tokens;
                println!("token echo {}", if show_tokens { "on" } else { "off" });
            }
            _ => {
                if show_tokens {
                    print_tokens(trimmed);
                }
                match render_line(trimmed) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(errors) => report_parse_errors("<repl>", trimmed, &errors)?,
                }
            }
        }
    }

    Ok(())
}

/// Parse one line and return its reconstruction.
fn render_line(line: &str) -> Result<String, Vec<ParseError>> {
    let result = parse(line);
    if result.is_ok() {
        Ok(result.program.to_string())
    } else {
        Err(result.errors)
    }
}

fn print_tokens(line: &str) {
    let (tokens, _) = tokenize(line);
    let rendered: Vec<_> = tokens
        .iter()
        .map(|token| format!("{:?}({})", token.kind, token.literal()))
        .collect();
    println!("{}", rendered.join(" "));
}

fn print_help() {
    println!("Commands:");
    println!("  :tokens  - Toggle echoing the token stream");
    println!("  :help    - Show this help");
    println!("  :quit    - Exit REPL");
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_echoes_reconstruction() {
        assert_eq!(render_line("let x = 1 + 2 * 3;"), Ok("let x = (1 + (2 * 3));".to_string()));
        assert_eq!(render_line("-a"), Ok("(-a)".to_string()));
    }

    #[test]
    fn test_render_line_returns_errors() {
        let errors = render_line("let 5;").unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
