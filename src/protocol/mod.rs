//! Host link protocol.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                    Protocol Stack                      │
//! │                                                        │
//! │  ┌───────────┐   ┌──────────┐   ┌───────────────────┐  │
//! │  │ Transport │──▶│ Decoder  │──▶│ CommandDispatcher │  │
//! │  │ (trait)   │   │ (3-byte) │   │  (app layer)      │  │
//! │  └───────────┘   └──────────┘   └───────────────────┘  │
//! │        ▲                                 │             │
//! │        │         ┌───────────────────────┘             │
//! │        │         ▼                                     │
//! │  ┌───────────┐   ┌──────────┐                          │
//! │  │ Transport │◀──│ Report   │   (text lines to host)   │
//! │  │ (write)   │   │ (render) │                          │
//! │  └───────────┘   └──────────┘                          │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod decoder;
pub mod frame;
pub mod opcode;
pub mod report;
pub mod transport;
