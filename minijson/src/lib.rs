// SPDX-License-Identifier: Apache-2.0

//! A streaming JSON token decoder for targets without a heap.
//!
//! Input is pulled from a [`Reader`] through a tiny fixed-size [`Window`] (8 bytes by default).
//! The caller drives decoding: [`StreamDecoder::read_type`] classifies the next token, then the
//! caller extracts it, skips it, or recurses into it. No tree is built and nothing is allocated.

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod config;
pub use config::{DecoderConfig, DEFAULT_MAX_DEPTH, DEFAULT_WINDOW_CAPACITY, MIN_WINDOW_CAPACITY};

mod escape_processor;

mod int_parser;
pub use int_parser::JsonInt;

mod number_decoder;

mod parse_error;
pub use parse_error::{status_code, ParseError, STATUS_OK};

mod reader;
#[cfg(feature = "std")]
pub use reader::IoReader;
pub use reader::Reader;

mod shared;
pub use shared::{ArrayToken, JsonType, ObjectToken};

mod skip;

mod slice_reader;
pub use slice_reader::SliceReader;

mod stream_decoder;
pub use stream_decoder::StreamDecoder;

mod string_decoder;

mod window;
pub use window::Window;
