// SPDX-License-Identifier: Apache-2.0

//! A convenience Reader implementation for in-memory data.
//!
//! This module provides [`SliceReader`], a [`Reader`] over a byte slice. It is
//! handy for tests, for documents already in RAM, and for simulating a
//! latency-bounded source that delivers data in small pieces.
//!
//! For production use cases involving I/O, you'll typically implement the
//! [`Reader`] trait for your specific input source:
//!
//! - **File I/O**: wrap `std::fs::File` in [`IoReader`](crate::IoReader) (feature `std`)
//! - **UART/Serial**: `impl Reader for SerialPort`, blocking until the request is filled
//! - **Custom buffers**: Ring buffers, DMA regions, memory-mapped flash, etc.
//!
//! # Examples
//!
//! ```rust
//! use minijson::{JsonType, SliceReader, StreamDecoder};
//!
//! let json = br#"{"name":"Alice","age":30}"#;
//! let mut decoder: StreamDecoder<_> = StreamDecoder::new(SliceReader::new(json));
//!
//! assert_eq!(decoder.read_type(), Ok(JsonType::Object));
//! ```

use crate::Reader;

/// A [`Reader`] that serves bytes from a slice.
///
/// 1.  **Whole slice**: [`SliceReader::new()`] satisfies every request in full
///     until the data runs out.
///
/// 2.  **Chunked**: [`SliceReader::chunked()`] serves at most `chunk_size` bytes per
///     `read()` call. Larger requests come back short, which the decoder reports as
///     a read failure while keeping the bytes that did arrive. This models a
///     non-blocking source with a timeout.
#[derive(Debug)]
pub struct SliceReader<'a> {
    data: &'a [u8],
    pos: usize,
    chunk_size: usize,
}

impl<'a> SliceReader<'a> {
    /// Create a reader that serves the whole slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: usize::MAX,
        }
    }

    /// Create a reader that returns at most `chunk_size` bytes per call (minimum 1).
    pub fn chunked(data: &'a [u8], chunk_size: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Number of bytes handed out so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The bytes not yet handed out.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }
}

impl Reader for SliceReader<'_> {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = self.remaining();
        let to_copy = remaining.len().min(buf.len()).min(self.chunk_size);

        if let (Some(dest), Some(src)) = (buf.get_mut(..to_copy), remaining.get(..to_copy)) {
            dest.copy_from_slice(src);
            self.pos = self.pos.saturating_add(to_copy);
            Ok(to_copy)
        } else {
            Ok(0)
        }
    }
}
