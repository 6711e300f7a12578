// SPDX-License-Identifier: Apache-2.0

//! Number extraction.
//!
//! [`StreamDecoder::read_type`] leaves numbers untouched, so these readers start at the sign
//! or first digit. Every reader consumes the complete numeric token, and needs to see the
//! byte that follows it (a delimiter) to know where the token ends.

use crate::int_parser::JsonInt;
use crate::parse_error::ParseError;
use crate::shared::is_number_byte;
use crate::{Reader, StreamDecoder};

impl<R: Reader, const N: usize> StreamDecoder<R, N> {
    /// Consume any remaining number characters (digits, `.`, `e`, `E`, `+`, `-`).
    fn skip_number_tail(&mut self) -> Result<(), ParseError> {
        while is_number_byte(self.current_byte()?) {
            self.consume(1);
        }
        Ok(())
    }

    /// Read the integer part of a number into `T`.
    ///
    /// An optional `-` and the leading digit run form the value; overflow wraps.
    /// A fraction or exponent that follows is consumed and discarded, so `127.5` reads
    /// as `127` and `1e3` as `1`.
    pub fn read_int<T: JsonInt>(&mut self) -> Result<T, ParseError> {
        self.skip_insignificant_whitespace()?;
        let negative = self.current_byte()? == b'-';
        if negative {
            self.consume(1);
        }

        let mut value = T::ZERO;
        loop {
            let byte = self.current_byte()?;
            if !byte.is_ascii_digit() {
                break;
            }
            value = value.push_digit(byte - b'0');
            self.consume(1);
        }
        if negative {
            value = value.wrapping_negate();
        }

        self.skip_number_tail()?;
        Ok(value)
    }

    /// Read a number as an `i8`. See [`read_int`](Self::read_int).
    pub fn read_i8(&mut self) -> Result<i8, ParseError> {
        self.read_int()
    }

    /// Read a number as an `i16`. See [`read_int`](Self::read_int).
    pub fn read_i16(&mut self) -> Result<i16, ParseError> {
        self.read_int()
    }

    /// Read a number as an `i32`. See [`read_int`](Self::read_int).
    pub fn read_i32(&mut self) -> Result<i32, ParseError> {
        self.read_int()
    }

    /// Read a number as an `i64`. See [`read_int`](Self::read_int).
    pub fn read_i64(&mut self) -> Result<i64, ParseError> {
        self.read_int()
    }

    /// Copy the raw text of a number into `buf` for the host's own numeric parser.
    ///
    /// Characters past `buf.len()` are consumed without copying. Returns the number of
    /// bytes copied.
    pub fn read_number_as_string(&mut self, buf: &mut [u8]) -> Result<usize, ParseError> {
        self.skip_insignificant_whitespace()?;
        let mut copied = 0;
        for slot in buf.iter_mut() {
            let byte = self.current_byte()?;
            if !is_number_byte(byte) {
                break;
            }
            *slot = byte;
            self.consume(1);
            copied += 1;
        }
        self.skip_number_tail()?;
        Ok(copied)
    }

    /// Consume a number without keeping it.
    pub fn skip_number(&mut self) -> Result<(), ParseError> {
        self.read_number_as_string(&mut []).map(|_| ())
    }
}
