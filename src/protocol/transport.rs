//! Transport abstraction: any byte-oriented channel to the show controller.
//!
//! Concrete implementations:
//! - UART (console UART on the ESP32-S3), see `adapters::uart`
//! - In-memory scripted links in the host tests
//!
//! The decoder and the serial sink are generic over `Transport`, so adding a
//! new link requires zero changes to the command path.

/// Byte-oriented transport channel.
pub trait Transport {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Read up to `buf.len()` bytes into `buf` without waiting.
    /// Returns 0 if no data is available.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read until `buf` is full or `timeout_ms` elapses, whichever comes first.
    /// Returns the number of bytes actually read.
    fn read_within(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error>;

    /// Write `data` to the transport.
    /// Returns the number of bytes actually written.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Check if data is available for reading.
    fn available(&self) -> bool;
}

/// A null transport that discards all writes and never reads.
/// Useful when the figure runs stand-alone without a show controller.
pub struct NullTransport;

impl Transport for NullTransport {
    type Error = ();

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, ()> {
        Ok(0)
    }

    fn read_within(&mut self, _buf: &mut [u8], _timeout_ms: u32) -> Result<usize, ()> {
        Ok(0)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn available(&self) -> bool {
        false
    }
}
