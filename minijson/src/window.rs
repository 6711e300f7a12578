// SPDX-License-Identifier: Apache-2.0

use crate::config::{CapacityCheck, DEFAULT_WINDOW_CAPACITY};
use crate::parse_error::ParseError;
use crate::Reader;

/// A fixed-capacity sliding window over the input stream.
///
/// Key design principles:
/// - Only the unconsumed region `[start, start + len)` is meaningful
/// - The reader fills the space right after that region, and only with the bytes requested
/// - Compaction (moving the region back to offset 0) is deferred until a request
///   would not fit in the tail, so runs of small reads do not each pay for a memmove
pub struct Window<const N: usize = { DEFAULT_WINDOW_CAPACITY }> {
    buffer: [u8; N],
    /// Offset of the first unconsumed byte
    start: usize,
    /// Number of unconsumed bytes
    len: usize,
}

impl<const N: usize> Window<N> {
    /// Create an empty window.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = CapacityCheck::<N>::VALID;
        Self {
            buffer: [0; N],
            start: 0,
            len: 0,
        }
    }

    /// Total capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of buffered, unconsumed bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no unconsumed bytes are buffered.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The buffered, unconsumed bytes.
    pub fn bytes(&self) -> &[u8] {
        self.buffer
            .get(self.start..self.start.saturating_add(self.len))
            .unwrap_or(&[])
    }

    /// The byte `offset` positions past the window start, if buffered.
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes().get(offset).copied()
    }

    /// Make sure at least `n` unconsumed bytes are buffered, pulling the deficit from `reader`.
    ///
    /// Requests exactly the missing bytes. If the reader comes back short, whatever did
    /// arrive stays buffered and [`ParseError::ReadError`] is returned.
    ///
    /// # Panics
    /// If `n` exceeds the window capacity. That is a caller bug, not a stream condition.
    pub fn ensure<R: Reader + ?Sized>(
        &mut self,
        n: usize,
        reader: &mut R,
    ) -> Result<(), ParseError> {
        if self.len >= n {
            return Ok(());
        }
        assert!(n <= N, "requested {} bytes from a {}-byte window", n, N);

        let deficit = n - self.len;
        if N - self.start - self.len < deficit {
            self.compact();
        }

        let fill_start = self.start + self.len;
        let dest = &mut self.buffer[fill_start..fill_start + deficit];
        let filled = match reader.read(dest) {
            Ok(count) => count.min(deficit),
            Err(_) => {
                log::trace!("Window: reader failed while pulling {deficit} bytes");
                return Err(ParseError::ReadError);
            }
        };
        self.len += filled;

        if filled < deficit {
            log::trace!("Window: short read, wanted {deficit} got {filled}");
            return Err(ParseError::ReadError);
        }
        Ok(())
    }

    /// Drop `n` bytes from the front of the window. Never touches the reader.
    ///
    /// `n` must not exceed [`Window::len`].
    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.len, "consumed {n} of {} buffered bytes", self.len);
        let n = n.min(self.len);
        self.start += n;
        self.len -= n;
    }

    /// Move the unconsumed region to offset 0.
    fn compact(&mut self) {
        log::trace!(
            "Window: compacting {} bytes from offset {}",
            self.len,
            self.start
        );
        self.buffer.copy_within(self.start..self.start + self.len, 0);
        self.start = 0;
    }
}

impl<const N: usize> Default for Window<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for Window<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Window")
            .field("capacity", &N)
            .field("start", &self.start)
            .field("bytes", &self.bytes())
            .finish()
    }
}
