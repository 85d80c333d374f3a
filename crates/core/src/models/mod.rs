//! Data models for Pigeonhole

mod contact;
mod message;

pub use contact::*;
pub use message::*;
