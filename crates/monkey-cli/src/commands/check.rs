//! Check command - check files for parse errors.

use monkey_parser::parse;
use std::fs;
use std::path::Path;

use crate::diagnostics::offset_to_line_col;

pub fn run(files: &[std::path::PathBuf]) -> miette::Result<()> {
    if files.is_empty() {
        return Err(miette::miette!("No files specified"));
    }

    let mut total_errors = 0;

    for file in files {
        total_errors += check_file(file)?;
    }

    println!();
    if total_errors > 0 {
        println!("Check complete: {} error(s)", total_errors);
        Err(miette::miette!("{} errors found", total_errors))
    } else {
        println!("Check complete: no issues found");
        Ok(())
    }
}

fn check_file(file: &Path) -> miette::Result<usize> {
    let source = fs::read_to_string(file)
        .map_err(|e| miette::miette!("Failed to read {}: {}", file.display(), e))?;

    println!("Checking: {}", file.display());

    let result = parse(&source);

    for err in &result.errors {
        let (line, col) = offset_to_line_col(&source, err.span().start);
        println!("  error: {}", err);
        println!("   --> {}:{}:{}", file.display(), line, col);
        println!("    |");
        print_source_line(&source, line);
        println!("    |");
    }

    if result.errors.is_empty() {
        println!("  ok ({} statements)", result.program.len());
    }

    Ok(result.errors.len())
}

fn print_source_line(source: &str, line_num: usize) {
    if let Some(line) = source.lines().nth(line_num - 1) {
        println!("{:4} | {}", line_num, line);
    }
}
