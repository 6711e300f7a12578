// SPDX-License-Identifier: Apache-2.0

//! Token tags shared by the dispatcher and the structural readers.

/// The type of the next JSON value, as classified by
/// [`StreamDecoder::read_type`](crate::StreamDecoder::read_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    /// `null`, fully consumed.
    Null,
    /// `true`, fully consumed.
    True,
    /// `false`, fully consumed.
    False,
    /// The opening quote was consumed; the body is still in the stream.
    String,
    /// Nothing was consumed; the sign or first digit is still in the stream.
    Number,
    /// The opening `{` was consumed.
    Object,
    /// The opening `[` was consumed.
    Array,
}

impl JsonType {
    /// Stable small-integer code for this type tag.
    pub const fn code(&self) -> i16 {
        match self {
            JsonType::Null => 1,
            JsonType::True => 2,
            JsonType::False => 3,
            JsonType::String => 4,
            JsonType::Number => 5,
            JsonType::Object => 6,
            JsonType::Array => 7,
        }
    }
}

/// What follows an array element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayToken {
    /// `,`: another element follows.
    Separator,
    /// `]`: the array is closed.
    End,
}

impl ArrayToken {
    /// Stable small-integer code for this subtype tag.
    pub const fn code(&self) -> i16 {
        match self {
            ArrayToken::Separator => 10,
            ArrayToken::End => 11,
        }
    }
}

/// What follows an object member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectToken {
    /// `,`: another member follows.
    Separator,
    /// `}`: the object is closed.
    End,
}

impl ObjectToken {
    /// Stable small-integer code for this subtype tag.
    pub const fn code(&self) -> i16 {
        match self {
            ObjectToken::Separator => 8,
            ObjectToken::End => 9,
        }
    }
}

/// Bytes that may appear inside a JSON number token.
pub(crate) const fn is_number_byte(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
}

/// JSON insignificant whitespace.
pub(crate) const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
