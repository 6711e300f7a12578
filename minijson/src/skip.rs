// SPDX-License-Identifier: Apache-2.0

//! Structural skippers: walk arrays and objects without keeping anything.
//!
//! Nesting is followed by recursion, bounded by [`DecoderConfig::max_depth`](crate::DecoderConfig).

use crate::parse_error::ParseError;
use crate::shared::{ArrayToken, JsonType, ObjectToken};
use crate::{Reader, StreamDecoder};

impl<R: Reader, const N: usize> StreamDecoder<R, N> {
    /// Skip the next value of any type, leaving the stream right after it.
    pub fn skip_value(&mut self) -> Result<(), ParseError> {
        self.skip_value_at(0)
    }

    /// Skip the rest of an array whose `[` was already consumed.
    pub fn skip_array(&mut self) -> Result<(), ParseError> {
        self.skip_array_at(1)
    }

    /// Skip the rest of an object whose `{` was already consumed.
    pub fn skip_object(&mut self) -> Result<(), ParseError> {
        self.skip_object_at(1)
    }

    fn skip_value_at(&mut self, depth: usize) -> Result<(), ParseError> {
        match self.read_type()? {
            JsonType::Array => self.skip_array_at(depth + 1),
            JsonType::Object => self.skip_object_at(depth + 1),
            JsonType::Number => self.skip_number(),
            JsonType::String => self.skip_string(),
            JsonType::Null | JsonType::True | JsonType::False => Ok(()),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), ParseError> {
        if depth > self.config().max_depth {
            log::debug!(
                "skip: nesting depth {} exceeds limit {}",
                depth,
                self.config().max_depth
            );
            return Err(ParseError::MaxDepthReached);
        }
        Ok(())
    }

    fn skip_array_at(&mut self, depth: usize) -> Result<(), ParseError> {
        self.check_depth(depth)?;
        if self.try_read_array_end()? {
            return Ok(());
        }
        loop {
            self.skip_value_at(depth)?;
            match self.read_array_separator_or_end()? {
                ArrayToken::Separator => continue,
                ArrayToken::End => return Ok(()),
            }
        }
    }

    fn skip_object_at(&mut self, depth: usize) -> Result<(), ParseError> {
        self.check_depth(depth)?;
        if self.try_read_object_end()? {
            return Ok(());
        }
        loop {
            self.readcheck_string_start()?;
            self.skip_string()?;
            self.read_object_key_separator()?;
            self.skip_value_at(depth)?;
            match self.read_object_separator_or_end()? {
                ObjectToken::Separator => continue,
                ObjectToken::End => return Ok(()),
            }
        }
    }
}
