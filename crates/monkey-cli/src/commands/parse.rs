//! Parse command - parse a file and show the reconstructed program.

use monkey_ast::{Node, Statement};
use monkey_parser::parse;
use std::fs;
use std::path::Path;

use crate::diagnostics::report_parse_errors;

pub fn run(file: &Path, json: bool) -> miette::Result<()> {
    let source = fs::read_to_string(file)
        .map_err(|e| miette::miette!("Failed to read file: {}", e))?;

    println!("Parsing: {}\n", file.display());

    let result = parse(&source);
    tracing::debug!(
        statements = result.program.len(),
        errors = result.errors.len(),
        "parsed {}",
        file.display()
    );

    report_parse_errors(&file.display().to_string(), &source, &result.errors)?;

    if json {
        let json = serde_json::to_string_pretty(&result.program)
            .map_err(|e| miette::miette!("Failed to serialize AST: {}", e))?;
        println!("{}", json);
    } else {
        println!("AST:");
        for stmt in result.program.statements() {
            println!("  {:<10} {}", statement_label(stmt), stmt);
        }
    }

    println!(
        "\n{} statements, {} errors",
        result.program.len(),
        result.errors.len()
    );

    if !result.errors.is_empty() {
        Err(miette::miette!("{} parse errors", result.errors.len()))
    } else {
        Ok(())
    }
}

fn statement_label(stmt: &Statement) -> String {
    match stmt {
        Statement::Let(_) | Statement::Return(_) => stmt.token_literal().to_string(),
        Statement::Expression(_) => "expr".to_string(),
    }
}
