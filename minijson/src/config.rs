// SPDX-License-Identifier: Apache-2.0

//! Decoder configuration and compile-time capacity validation.

/// Window capacity used when none is given.
pub const DEFAULT_WINDOW_CAPACITY: usize = 8;

/// Smallest usable window: the dispatcher must see all of `false` at once.
pub const MIN_WINDOW_CAPACITY: usize = 5;

/// Default nesting limit for the structural skippers.
pub const DEFAULT_MAX_DEPTH: usize = 255;

/// Compile-time check that a window of `N` bytes can hold the longest literal.
///
/// Evaluated when a window is constructed, so an undersized capacity is a build error
/// rather than a runtime surprise.
pub(crate) struct CapacityCheck<const N: usize>;

impl<const N: usize> CapacityCheck<N> {
    pub(crate) const VALID: () = assert!(
        N >= MIN_WINDOW_CAPACITY,
        "window capacity must be at least 5 bytes to hold the literal `false`"
    );
}

/// Runtime options for a [`StreamDecoder`](crate::StreamDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest array/object nesting the skippers will follow.
    pub max_depth: usize,
    /// Skip JSON whitespace before tokens. Off by default: only compact JSON is accepted.
    pub skip_whitespace: bool,
}

impl DecoderConfig {
    /// Configuration for compact JSON with the default nesting limit.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            skip_whitespace: false,
        }
    }

    /// Set the nesting limit.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable whitespace skipping between tokens.
    pub const fn with_whitespace(mut self, skip_whitespace: bool) -> Self {
        self.skip_whitespace = skip_whitespace;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}
