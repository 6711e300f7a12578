// SPDX-License-Identifier: Apache-2.0

use crate::config::{DecoderConfig, DEFAULT_WINDOW_CAPACITY};
use crate::parse_error::ParseError;
use crate::shared::{is_whitespace, ArrayToken, JsonType, ObjectToken};
use crate::window::Window;
use crate::Reader;

/// A streaming JSON token decoder over a fixed-size window.
///
/// The decoder never materializes a value. The caller asks what comes next with
/// [`read_type`](Self::read_type), then either extracts it (strings, integers, numbers as text)
/// or skips it, recursing into arrays and objects as it sees fit. At most `N` unconsumed bytes
/// are ever held in memory.
///
/// # Example
/// ```
/// use minijson::{JsonType, ObjectToken, SliceReader, StreamDecoder};
///
/// let json = br#"{"id":42,"tags":["a","b"],"name":"probe"}"#;
/// let mut decoder = StreamDecoder::new(SliceReader::new(json));
/// let mut key = [0u8; 8];
/// let mut id = None;
///
/// decoder.readcheck_object_start().unwrap();
/// if !decoder.try_read_object_end().unwrap() {
///     loop {
///         decoder.readcheck_string_start().unwrap();
///         let len = decoder.read_full_string(&mut key).unwrap();
///         decoder.read_object_key_separator().unwrap();
///         if &key[..len.min(key.len())] == b"id" {
///             assert_eq!(decoder.read_type().unwrap(), JsonType::Number);
///             id = Some(decoder.read_i32().unwrap());
///         } else {
///             decoder.skip_value().unwrap();
///         }
///         if decoder.read_object_separator_or_end().unwrap() == ObjectToken::End {
///             break;
///         }
///     }
/// }
/// assert_eq!(id, Some(42));
/// ```
pub struct StreamDecoder<R: Reader, const N: usize = { DEFAULT_WINDOW_CAPACITY }> {
    /// Source of input bytes
    reader: R,
    /// The only buffered input
    window: Window<N>,
    config: DecoderConfig,
}

/// Methods for StreamDecoder using the default window capacity
impl<R: Reader> StreamDecoder<R> {
    /// Create a decoder with an 8-byte window and the default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, DecoderConfig::new())
    }
}

/// Methods for StreamDecoder with any window capacity
impl<R: Reader, const N: usize> StreamDecoder<R, N> {
    /// Create a decoder with an `N`-byte window and custom options.
    ///
    /// # Example
    /// ```
    /// use minijson::{DecoderConfig, SliceReader, StreamDecoder};
    ///
    /// let config = DecoderConfig::new().with_whitespace(true).with_max_depth(8);
    /// let mut decoder =
    ///     StreamDecoder::<_, 16>::with_config(SliceReader::new(b"[ 1, 2 ] "), config);
    /// decoder.skip_value().unwrap();
    /// ```
    pub fn with_config(reader: R, config: DecoderConfig) -> Self {
        Self {
            reader,
            window: Window::new(),
            config,
        }
    }

    /// The underlying reader.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// The underlying reader, mutably.
    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume the decoder, returning the reader. Buffered bytes are dropped.
    pub fn into_reader(self) -> R {
        self.reader
    }

    /// The options this decoder runs with.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// The window holding bytes pulled from the reader but not yet consumed.
    pub fn window(&self) -> &Window<N> {
        &self.window
    }

    pub(crate) fn ensure(&mut self, n: usize) -> Result<(), ParseError> {
        self.window.ensure(n, &mut self.reader)
    }

    pub(crate) fn consume(&mut self, n: usize) {
        self.window.consume(n)
    }

    /// Look at the next byte without consuming it, pulling it in if needed.
    pub(crate) fn current_byte(&mut self) -> Result<u8, ParseError> {
        self.ensure(1)?;
        self.window.peek(0).ok_or(ParseError::ReadError)
    }

    /// Drop whitespace ahead of a token when the configuration allows it.
    pub(crate) fn skip_insignificant_whitespace(&mut self) -> Result<(), ParseError> {
        if self.config.skip_whitespace {
            while is_whitespace(self.current_byte()?) {
                self.consume(1);
            }
        }
        Ok(())
    }

    /// Consume `expected` if it is the next byte.
    fn read_byte(&mut self, expected: u8) -> Result<(), ParseError> {
        if self.current_byte()? == expected {
            self.consume(1);
            Ok(())
        } else {
            Err(ParseError::TestNotTrue)
        }
    }

    fn read_literal(&mut self, literal: &[u8], tag: JsonType) -> Result<JsonType, ParseError> {
        self.ensure(literal.len())?;
        if self.window.bytes().starts_with(literal) {
            self.consume(literal.len());
            Ok(tag)
        } else {
            Err(ParseError::UnknownType)
        }
    }

    /// Classify the next token.
    ///
    /// Literals and container/string openers are consumed. For numbers nothing is
    /// consumed, so the number readers see the sign and every digit.
    pub fn read_type(&mut self) -> Result<JsonType, ParseError> {
        self.skip_insignificant_whitespace()?;
        let found = match self.current_byte()? {
            b'"' => {
                self.consume(1);
                JsonType::String
            }
            b'{' => {
                self.consume(1);
                JsonType::Object
            }
            b'[' => {
                self.consume(1);
                JsonType::Array
            }
            b't' => self.read_literal(b"true", JsonType::True)?,
            b'f' => self.read_literal(b"false", JsonType::False)?,
            b'n' => self.read_literal(b"null", JsonType::Null)?,
            b'-' | b'0'..=b'9' => JsonType::Number,
            _ => return Err(ParseError::UnknownType),
        };
        log::trace!("read_type: {:?}", found);
        Ok(found)
    }

    /// Any outcome other than `expected`, dispatch errors included, is a [`ParseError::CheckFailure`].
    fn read_expected_type(&mut self, expected: JsonType) -> Result<(), ParseError> {
        match self.read_type() {
            Ok(found) if found == expected => Ok(()),
            other => {
                log::debug!("expected {:?}, found {:?}", expected, other);
                Err(ParseError::CheckFailure)
            }
        }
    }

    /// Read a `null`, failing with [`ParseError::CheckFailure`] on any other type.
    pub fn readcheck_null(&mut self) -> Result<(), ParseError> {
        self.read_expected_type(JsonType::Null)
    }

    /// Read a boolean, failing with [`ParseError::CheckFailure`] on any other type.
    pub fn readcheck_boolean(&mut self) -> Result<bool, ParseError> {
        match self.read_type() {
            Ok(JsonType::True) => Ok(true),
            Ok(JsonType::False) => Ok(false),
            other => {
                log::debug!("expected boolean, found {:?}", other);
                Err(ParseError::CheckFailure)
            }
        }
    }

    /// Consume the opening quote of a string, failing with
    /// [`ParseError::CheckFailure`] on any other type.
    pub fn readcheck_string_start(&mut self) -> Result<(), ParseError> {
        self.read_expected_type(JsonType::String)
    }

    /// Consume `[`, failing with [`ParseError::CheckFailure`] on any other type.
    pub fn readcheck_array_start(&mut self) -> Result<(), ParseError> {
        self.read_expected_type(JsonType::Array)
    }

    /// Consume `{`, failing with [`ParseError::CheckFailure`] on any other type.
    pub fn readcheck_object_start(&mut self) -> Result<(), ParseError> {
        self.read_expected_type(JsonType::Object)
    }

    /// Consume the closing quote of a string after [`read_partial_string`](Self::read_partial_string).
    pub fn read_string_end(&mut self) -> Result<(), ParseError> {
        self.read_byte(b'"')
    }

    /// Consume the `:` between an object key and its value.
    pub fn read_object_key_separator(&mut self) -> Result<(), ParseError> {
        self.skip_insignificant_whitespace()?;
        self.read_byte(b':')
    }

    /// Consume the `,` or `]` following an array element.
    pub fn read_array_separator_or_end(&mut self) -> Result<ArrayToken, ParseError> {
        self.skip_insignificant_whitespace()?;
        let token = match self.current_byte()? {
            b',' => ArrayToken::Separator,
            b']' => ArrayToken::End,
            _ => return Err(ParseError::TestNotTrue),
        };
        self.consume(1);
        Ok(token)
    }

    /// Consume the `,` or `}` following an object member.
    pub fn read_object_separator_or_end(&mut self) -> Result<ObjectToken, ParseError> {
        self.skip_insignificant_whitespace()?;
        let token = match self.current_byte()? {
            b',' => ObjectToken::Separator,
            b'}' => ObjectToken::End,
            _ => return Err(ParseError::TestNotTrue),
        };
        self.consume(1);
        Ok(token)
    }

    /// Right after `[`: consume `]` and return true if the array is empty.
    /// Otherwise leave the first element in place and return false.
    pub fn try_read_array_end(&mut self) -> Result<bool, ParseError> {
        self.try_read_closing(b']')
    }

    /// Right after `{`: consume `}` and return true if the object is empty.
    /// Otherwise leave the first key in place and return false.
    pub fn try_read_object_end(&mut self) -> Result<bool, ParseError> {
        self.try_read_closing(b'}')
    }

    fn try_read_closing(&mut self, closing: u8) -> Result<bool, ParseError> {
        self.skip_insignificant_whitespace()?;
        if self.current_byte()? == closing {
            self.consume(1);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl<R: Reader + core::fmt::Debug, const N: usize> core::fmt::Debug for StreamDecoder<R, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StreamDecoder")
            .field("reader", &self.reader)
            .field("window", &self.window)
            .field("config", &self.config)
            .finish()
    }
}
