//! Utility macros for the scanner.
//!
//! - `MK_SINGLE!` - Emits a fixed one-byte token
//! - `MK_OPERATOR!` - Emits a one- or two-byte operator depending on a trailing `=`
//!
//! These macros reduce boilerplate in the dispatch loop.

/// Emits a fixed single-byte token and advances past it.
///
/// # Example
///
/// ```ignore
/// b'+' => MK_SINGLE!(self, Token::Plus),
/// ```
#[macro_export]
macro_rules! MK_SINGLE {
    ($lexer:expr, $token:expr) => {{
        $lexer.consume();
        $lexer.push($token);
    }};
}

/// Emits `$double` when the byte after the cursor is `=`, consuming both
/// bytes, otherwise emits `$single` and consumes one byte.
///
/// # Example
///
/// ```ignore
/// b'!' => MK_OPERATOR!(self, Token::Bang, Token::BangEqual),
/// ```
#[macro_export]
macro_rules! MK_OPERATOR {
    ($lexer:expr, $single:expr, $double:expr) => {{
        if $lexer.peek_next() == Some(b'=') {
            $lexer.consume();
            $lexer.consume();
            $lexer.push($double);
        } else {
            $lexer.consume();
            $lexer.push($single);
        }
    }};
}
