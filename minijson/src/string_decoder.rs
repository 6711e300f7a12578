// SPDX-License-Identifier: Apache-2.0

//! String extraction. All readers expect the opening quote to be consumed already,
//! normally by [`StreamDecoder::read_type`] or [`StreamDecoder::readcheck_string_start`].

use crate::escape_processor::EscapeProcessor;
use crate::parse_error::ParseError;
use crate::{Reader, StreamDecoder};

impl<R: Reader, const N: usize> StreamDecoder<R, N> {
    /// Decode one byte of string content, or return `None` at the closing quote
    /// (which stays unconsumed).
    fn next_string_byte(&mut self) -> Result<Option<u8>, ParseError> {
        match self.current_byte()? {
            b'"' => Ok(None),
            b'\\' => {
                self.ensure(2)?;
                let escape_char = self.window().peek(1).ok_or(ParseError::ReadError)?;
                let decoded = EscapeProcessor::process_simple_escape(escape_char)?;
                self.consume(2);
                Ok(Some(decoded))
            }
            byte => {
                self.consume(1);
                Ok(Some(byte))
            }
        }
    }

    /// Decode string content into `buf` until it is full or the closing quote is next.
    ///
    /// The closing quote is left in the stream; finish with
    /// [`read_string_end`](Self::read_string_end), or call again to stream the rest of a long
    /// string through the same buffer. Returns the number of bytes written.
    pub fn read_partial_string(&mut self, buf: &mut [u8]) -> Result<usize, ParseError> {
        let mut written = 0;
        for slot in buf.iter_mut() {
            match self.next_string_byte()? {
                Some(byte) => {
                    *slot = byte;
                    written += 1;
                }
                None => break,
            }
        }
        Ok(written)
    }

    /// Decode a whole string, keeping as much as fits in `buf`, and consume the closing quote.
    ///
    /// Returns the full decoded length even when `buf` was too small, so
    /// `len > buf.len()` means the copy was truncated.
    pub fn read_full_string(&mut self, buf: &mut [u8]) -> Result<usize, ParseError> {
        let mut total = self.read_partial_string(buf)?;
        while self.next_string_byte()?.is_some() {
            total += 1;
        }
        self.read_string_end()?;
        Ok(total)
    }

    /// Consume the rest of a string without keeping any of it.
    pub fn skip_string(&mut self) -> Result<(), ParseError> {
        self.read_full_string(&mut []).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use crate::{JsonType, ParseError, SliceReader, StreamDecoder};
    use test_log::test;

    fn decoder(json: &[u8]) -> StreamDecoder<SliceReader<'_>> {
        StreamDecoder::new(SliceReader::new(json))
    }

    #[test]
    fn test_escape_in_string() {
        let mut d = decoder(b"\"a\\nb\"");
        assert_eq!(d.read_type(), Ok(JsonType::String));
        let mut buf = [0u8; 8];
        let len = d.read_full_string(&mut buf).unwrap();
        assert_eq!(len, 3);
        assert_eq!(&buf[..len], b"a\nb");
        assert!(d.reader().remaining().is_empty());
        assert!(d.window().is_empty());
    }

    #[test]
    fn test_all_escapes() {
        let mut d = decoder(br#""\"\\\/\b\f\n\r\t""#);
        d.readcheck_string_start().unwrap();
        let mut buf = [0u8; 16];
        let len = d.read_full_string(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"\"\\/\x08\x0c\n\r\t");
    }

    #[test]
    fn test_unknown_escape_rejected() {
        let mut d = decoder(b"\"\\q\"");
        d.readcheck_string_start().unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(d.read_full_string(&mut buf), Err(ParseError::UnknownType));
    }

    #[test]
    fn test_unicode_escape_unsupported() {
        let mut d = decoder(b"\"\\u0041\"");
        d.readcheck_string_start().unwrap();
        assert_eq!(d.skip_string(), Err(ParseError::UnknownType));
    }

    #[test]
    fn test_partial_read_leaves_quote() {
        let mut d = decoder(b"\"hello world\",");
        d.readcheck_string_start().unwrap();

        let mut buf = [0u8; 4];
        assert_eq!(d.read_partial_string(&mut buf), Ok(4));
        assert_eq!(&buf, b"hell");
        assert_eq!(d.read_partial_string(&mut buf), Ok(4));
        assert_eq!(&buf, b"o wo");
        assert_eq!(d.read_partial_string(&mut buf), Ok(3));
        assert_eq!(&buf[..3], b"rld");
        assert_eq!(d.read_partial_string(&mut buf), Ok(0));
        assert_eq!(d.read_string_end(), Ok(()));
        assert_eq!(d.read_array_separator_or_end(), Ok(crate::ArrayToken::Separator));
    }

    #[test]
    fn test_full_read_reports_true_length() {
        let mut d = decoder(b"\"abc\\tdefgh\"]");
        d.readcheck_string_start().unwrap();
        let mut buf = [0u8; 2];
        assert_eq!(d.read_full_string(&mut buf), Ok(9));
        assert_eq!(&buf, b"ab");
        assert_eq!(d.read_array_separator_or_end(), Ok(crate::ArrayToken::End));
    }

    #[test]
    fn test_unknown_escape_after_buffer_is_full() {
        let mut d = decoder(b"\"ab\\qc\"");
        d.readcheck_string_start().unwrap();
        let mut buf = [0u8; 1];
        assert_eq!(d.read_full_string(&mut buf), Err(ParseError::UnknownType));
    }

    #[test]
    fn test_empty_string() {
        let mut d = decoder(b"\"\"");
        d.readcheck_string_start().unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(d.read_full_string(&mut buf), Ok(0));
    }

    #[test]
    fn test_skip_string() {
        let mut d = decoder(b"\"long \\\"quoted\\\" text\"null");
        d.readcheck_string_start().unwrap();
        assert_eq!(d.skip_string(), Ok(()));
        assert_eq!(d.readcheck_null(), Ok(()));
    }

    #[test]
    fn test_unterminated_string_is_read_error() {
        let mut d = decoder(b"\"abc");
        d.readcheck_string_start().unwrap();
        assert_eq!(d.skip_string(), Err(ParseError::ReadError));
    }

    #[test]
    fn test_escape_split_across_refill() {
        // Backslash lands in the last window slot, its partner needs a compaction
        let mut d = StreamDecoder::<_, 5>::with_config(
            SliceReader::new(b"\"abc\\nd\""),
            Default::default(),
        );
        d.readcheck_string_start().unwrap();
        let mut buf = [0u8; 8];
        let len = d.read_full_string(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"abc\nd");
    }
}
