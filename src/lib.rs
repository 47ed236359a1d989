#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod reserved;
pub mod type_checker;

/// Text of a 1-based line, without its line terminator.
pub fn get_line_text(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source.lines().nth(index)
}


/// Renders a source error with the offending line.
///
/// ```text
/// error: unexpected ')' on line 20
/// syntax error: UnexpectedToken (tip)
/// -> final.ex
///    |
/// 20 | var b = (a));
///    |
/// ```
pub fn format_error(error: &Error, file: &Path, source: &str) -> String {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    let mut report = format!("error: {}\n", error);

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("{}: {}\n", error.get_category(), error.get_error_name()));
    } else {
        report.push_str(&format!(
            "{}: {} ({})\n",
            error.get_category(),
            error.get_error_name(),
            error.get_tip()
        ));
    }
    report.push_str(&format!("-> {}\n", file.to_string_lossy()));

    if let Some(line_text) = get_line_text(source, error.get_line()) {
        report.push_str(&format!("{:>padding$}\n", "|"));
        report.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
        report.push_str(&format!("{:>padding$}\n", "|"));
    }

    report
}

pub fn display_error(error: &Error, file: &Path, source: &str) {
    eprint!("{}", format_error(error, file, source));
}
