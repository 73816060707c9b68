//! UART link to the show controller.
//!
//! Thin [`Transport`] over the ESP-IDF UART driver installed by
//! `hw_init`.  The handle is just a port number, so the decoder and the
//! serial event sink each hold their own copy of it.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: raw `uart_*` driver calls.
//! On host/test: a silent link that never has data and swallows writes.

use crate::error::TransportError;
use crate::protocol::transport::Transport;

#[derive(Debug, Clone, Copy)]
pub struct UartTransport {
    port: i32,
}

impl UartTransport {
    pub const fn new(port: i32) -> Self {
        Self { port }
    }

    pub const fn port(&self) -> i32 {
        self.port
    }
}

#[cfg(target_os = "espidf")]
mod imp {
    use esp_idf_svc::sys::*;

    use super::{TransportError, UartTransport};

    pub(super) fn ms_to_ticks(ms: u32) -> TickType_t {
        (u64::from(ms) * u64::from(configTICK_RATE_HZ) / 1_000) as TickType_t
    }

    pub(super) fn read(link: &UartTransport, buf: &mut [u8], ticks: TickType_t) -> Result<usize, TransportError> {
        // SAFETY: buf is valid for buf.len() bytes; the driver was installed in hw_init.
        let n = unsafe { uart_read_bytes(link.port, buf.as_mut_ptr().cast(), buf.len() as u32, ticks) };
        if n < 0 {
            return Err(TransportError::ReadFailed(n));
        }
        Ok(n as usize)
    }

    pub(super) fn write(link: &UartTransport, data: &[u8]) -> Result<usize, TransportError> {
        // SAFETY: data is valid for data.len() bytes.
        let n = unsafe { uart_write_bytes(link.port, data.as_ptr().cast(), data.len()) };
        if n < 0 {
            return Err(TransportError::WriteFailed(n));
        }
        Ok(n as usize)
    }

    pub(super) fn flush(link: &UartTransport) -> Result<(), TransportError> {
        // SAFETY: plain driver call on an installed port.
        let rc = unsafe { uart_wait_tx_done(link.port, ms_to_ticks(100)) };
        if rc != ESP_OK as i32 {
            return Err(TransportError::WriteFailed(rc));
        }
        Ok(())
    }

    pub(super) fn buffered(link: &UartTransport) -> usize {
        let mut len: usize = 0;
        // SAFETY: len outlives the call.
        let rc = unsafe { uart_get_buffered_data_len(link.port, &mut len) };
        if rc != ESP_OK as i32 { 0 } else { len }
    }
}

#[cfg(target_os = "espidf")]
impl Transport for UartTransport {
    type Error = TransportError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        imp::read(self, buf, 0)
    }

    fn read_within(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, TransportError> {
        imp::read(self, buf, imp::ms_to_ticks(timeout_ms))
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, TransportError> {
        imp::write(self, data)
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        imp::flush(self)
    }

    fn available(&self) -> bool {
        imp::buffered(self) > 0
    }
}

#[cfg(not(target_os = "espidf"))]
impl Transport for UartTransport {
    type Error = TransportError;

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, TransportError> {
        Ok(0)
    }

    fn read_within(&mut self, _buf: &mut [u8], _timeout_ms: u32) -> Result<usize, TransportError> {
        Ok(0)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, TransportError> {
        log::trace!("uart(sim){}: {} bytes", self.port, data.len());
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    fn available(&self) -> bool {
        false
    }
}
