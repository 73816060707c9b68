//! Unified error types for the PapaGuy firmware.
//!
//! The control core itself never fails: malformed commands are logged and
//! dropped, payloads are clamped, missing actuators are skipped.  What is
//! left is the plumbing around it (UART, configuration, peripheral setup),
//! which funnels into this single `Copy` enum.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The byte link to the host failed.
    Transport(TransportError),
    /// Build-time configuration is inconsistent.
    Config(&'static str),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The driver rejected a read (rc from the UART driver).
    ReadFailed(i32),
    /// The driver rejected a write.
    WriteFailed(i32),
    /// The UART driver has not been installed.
    NotInstalled,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(rc) => write!(f, "read failed (rc={rc})"),
            Self::WriteFailed(rc) => write!(f, "write failed (rc={rc})"),
            Self::NotInstalled => write!(f, "UART driver not installed"),
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_converts_and_displays() {
        let e: Error = TransportError::ReadFailed(-1).into();
        assert_eq!(e, Error::Transport(TransportError::ReadFailed(-1)));
        assert_eq!(e.to_string(), "transport: read failed (rc=-1)");
    }
}
