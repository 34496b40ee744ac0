//! Rendering of parse errors for the terminal.

use ariadne::{Color, Label, Report, ReportKind, Source};
use monkey_parser::ParseError;

/// Print every error as an annotated source snippet on stderr.
pub(crate) fn report_parse_errors(
    name: &str,
    source: &str,
    errors: &[ParseError],
) -> miette::Result<()> {
    for err in errors {
        let span = err.span();
        Report::build(ReportKind::Error, name.to_string(), span.start)
            .with_message(err.to_string())
            .with_label(
                Label::new((name.to_string(), span))
                    .with_message(label_for(err))
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((name.to_string(), Source::from(source)))
            .map_err(|e| miette::miette!("Failed to write diagnostic: {}", e))?;
    }
    Ok(())
}

fn label_for(err: &ParseError) -> String {
    match err {
        ParseError::UnexpectedToken { expected, .. } => format!("expected {expected} here"),
        ParseError::NoPrefixRule { found, .. } => format!("{found} cannot start an expression"),
        ParseError::InvalidInteger { .. } => "does not fit in a 64-bit integer".to_string(),
        ParseError::Lex(_) => "illegal character".to_string(),
        ParseError::Incomplete(_) => "unfinished node".to_string(),
    }
}

/// Convert a byte offset into a 1-based line and column.
pub(crate) fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}
