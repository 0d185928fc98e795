//! Scanner configuration.
//!
//! The defaults reproduce the permissive behavior of the language's reference
//! scanner. The CLI builds a [`ScannerConfig`] from its flags.

/// What the scanner does with a byte that starts no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownBytePolicy {
    /// Consume the byte and carry on without emitting anything.
    #[default]
    Skip,
    /// Stop with an `UnexpectedCharacter` error.
    Reject,
}

/// Which bytes may follow the fractional part of a number literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberTerminator {
    /// Only a space, a newline or end of input.
    #[default]
    Layout,
    /// Anything except an alphanumeric byte or another `.`.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScannerConfig {
    pub unknown_bytes: UnknownBytePolicy,
    pub number_terminator: NumberTerminator,
}

impl ScannerConfig {
    pub fn strict() -> Self {
        ScannerConfig {
            unknown_bytes: UnknownBytePolicy::Reject,
            ..ScannerConfig::default()
        }
    }

    pub fn lenient_numbers(self) -> Self {
        ScannerConfig {
            number_terminator: NumberTerminator::Lenient,
            ..self
        }
    }
}
