//! # Events Module
//!
//! Event-driven progress reporting for the artwork auditor.
//!
//! The core emits events through a channel so any frontend (CLI progress
//! bar, CI log, future GUI) can observe extraction and generation progress
//! without the core knowing about it.

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::{
    Event, ExtractEvent, ExtractPhase, GenerateEvent, GenerateProgress, ReferenceProgress,
};
