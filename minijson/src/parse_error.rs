// SPDX-License-Identifier: Apache-2.0

/// Status code reported for a successful operation.
pub const STATUS_OK: i16 = 0;

/// Errors that can occur while decoding a JSON stream.
///
/// Every decoder stops at the first failure. Bytes consumed before the failure are gone,
/// so the stream is left positioned somewhere inside the offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The reader yielded fewer bytes than required, or failed outright.
    ReadError,
    /// The lookahead bytes did not match any valid JSON token or escape sequence.
    UnknownType,
    /// A type-specific expectation failed, e.g. a string was required but a number was found.
    CheckFailure,
    /// A specific punctuation byte was expected but another byte was found.
    TestNotTrue,
    /// A skipped array or object nested deeper than the configured maximum.
    MaxDepthReached,
}

impl ParseError {
    /// Stable small-integer code for this error, suitable for FFI or wire reporting.
    pub const fn code(&self) -> i16 {
        match self {
            ParseError::ReadError => -1,
            ParseError::UnknownType => -2,
            ParseError::CheckFailure => -3,
            ParseError::TestNotTrue => -4,
            ParseError::MaxDepthReached => -5,
        }
    }

    /// Inverse of [`ParseError::code`]. Returns `None` for [`STATUS_OK`] and unknown codes.
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            -1 => Some(ParseError::ReadError),
            -2 => Some(ParseError::UnknownType),
            -3 => Some(ParseError::CheckFailure),
            -4 => Some(ParseError::TestNotTrue),
            -5 => Some(ParseError::MaxDepthReached),
            _ => None,
        }
    }
}

/// Collapse a decoder result into its status code.
pub fn status_code<T>(result: &Result<T, ParseError>) -> i16 {
    match result {
        Ok(_) => STATUS_OK,
        Err(e) => e.code(),
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ReadError => write!(f, "reader returned fewer bytes than required"),
            ParseError::UnknownType => write!(f, "lookahead matched no JSON token"),
            ParseError::CheckFailure => write!(f, "unexpected JSON type"),
            ParseError::TestNotTrue => write!(f, "expected punctuation not found"),
            ParseError::MaxDepthReached => write!(f, "nesting too deep"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ParseError::ReadError.code(), -1);
        assert_eq!(ParseError::UnknownType.code(), -2);
        assert_eq!(ParseError::CheckFailure.code(), -3);
        assert_eq!(ParseError::TestNotTrue.code(), -4);
        assert_eq!(ParseError::MaxDepthReached.code(), -5);
    }

    #[test]
    fn test_from_code_inverts_code() {
        for err in [
            ParseError::ReadError,
            ParseError::UnknownType,
            ParseError::CheckFailure,
            ParseError::TestNotTrue,
            ParseError::MaxDepthReached,
        ] {
            assert_eq!(ParseError::from_code(err.code()), Some(err));
        }
        assert_eq!(ParseError::from_code(STATUS_OK), None);
        assert_eq!(ParseError::from_code(-42), None);
    }

    #[test]
    fn test_status_code_of_result() {
        let ok: Result<u8, ParseError> = Ok(7);
        assert_eq!(status_code(&ok), STATUS_OK);
        let err: Result<u8, ParseError> = Err(ParseError::TestNotTrue);
        assert_eq!(status_code(&err), -4);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParseError::MaxDepthReached.to_string(), "nesting too deep");
    }
}
