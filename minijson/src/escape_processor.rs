// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Decoding of the two-byte JSON escape sequences.
///
/// `\uXXXX` is not supported; the byte after the backslash must be one of
/// `" \ / b f n r t`.
pub(crate) struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or [`ParseError::UnknownType`] for any other character.
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'n' => Ok(b'\n'),
            b't' => Ok(b'\t'),
            b'r' => Ok(b'\r'),
            b'\\' => Ok(b'\\'),
            b'"' => Ok(b'"'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            _ => Err(ParseError::UnknownType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_escapes() {
        let table = [
            (b'"', b'"'),
            (b'\\', b'\\'),
            (b'/', b'/'),
            (b'b', 0x08),
            (b'f', 0x0C),
            (b'n', b'\n'),
            (b'r', b'\r'),
            (b't', b'\t'),
        ];
        for (escape_char, expected) in table {
            assert_eq!(EscapeProcessor::process_simple_escape(escape_char), Ok(expected));
        }
    }

    #[test]
    fn test_unsupported_escapes() {
        for escape_char in [b'q', b'u', b'x', b'0', b' ', b'N'] {
            assert_eq!(
                EscapeProcessor::process_simple_escape(escape_char),
                Err(ParseError::UnknownType)
            );
        }
    }
}
