#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

/// Byte offset into a source buffer, plus the name of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

/// Maps a byte offset to `(line number, line text, column)`.
///
/// The column counts characters, not bytes, so multibyte text before the
/// offset does not shift the caret. Invalid UTF-8 is shown as U+FFFD and
/// counts as one character per replaced sequence.
///
/// An offset at or past the end of `content` resolves to the end of the last
/// line, which is where unterminated literals report.
pub fn get_line_at_position(content: &[u8], position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(content.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive(|b| *b == b'\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, lossy(line), column(&line[..pos - start]));
        }

        start = end;
        line_number += 1;
    }

    // `pos` is the end of input: either an empty buffer or just after the
    // final newline.
    match content.split_inclusive(|b| *b == b'\n').last() {
        Some(line) if !line.ends_with(b"\n") => (line_number - 1, lossy(line), column(line)),
        _ => (line_number, String::new(), 0),
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn column(prefix: &[u8]) -> usize {
    String::from_utf8_lossy(prefix).chars().count()
}

/// Renders a scan error against its source the way the CLI prints it.
///
/// ```text
/// Error: MalformedNumber (Number `1.5` is followed by `x`, did you miss a space?)
/// -> main.lox
///   |
/// 1 | print 1.5x;
///   | ---------^
/// ```
pub fn render_error(error: &Error, source: &[u8]) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
