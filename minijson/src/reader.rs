// SPDX-License-Identifier: Apache-2.0

//! The pull-based byte source feeding a [`StreamDecoder`](crate::StreamDecoder).

/// Trait for input sources that can provide data to the decoder.
///
/// The decoder only ever asks for exactly the bytes it is missing, so implementations
/// for files, sockets or UARTs can block until the request is satisfied.
pub trait Reader {
    /// The error type returned by read operations
    type Error;

    /// Fill `buf` with the next bytes of the stream.
    /// Returns the number of bytes written.
    ///
    /// # Contract
    /// - `buf.len()` is the number of bytes the decoder needs right now
    /// - Returning fewer than `buf.len()` bytes is treated as a read failure for that call;
    ///   no distinction between end-of-stream and I/O failure reaches the decoder
    /// - A reader wanting to bound latency (timeouts, non-blocking I/O) does so by returning
    ///   a short read
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    type Error = R::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

/// Adapter driving a [`std::io::Read`] as a [`Reader`].
///
/// Keeps reading until the requested range is full or the inner reader reports
/// end of stream, so partial OS reads do not surface as short reads.
///
/// ```no_run
/// use minijson::{IoReader, StreamDecoder};
///
/// let file = std::fs::File::open("config.json").unwrap();
/// let mut decoder: StreamDecoder<_> = StreamDecoder::new(IoReader::new(file));
/// decoder.skip_value().unwrap();
/// ```
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoReader<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoReader<R> {
    /// Wrap an `io::Read` implementation.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap, returning the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> Reader for IoReader<R> {
    type Error = std::io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut filled = 0;
        while let Some(rest) = buf.get_mut(filled..) {
            if rest.is_empty() {
                break;
            }
            match self.inner.read(rest) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}
