//! # hashilint_text
//!
//! Text-level building blocks for the hashilint gateway:
//!
//! - [`Document`]: an owned snapshot of a buffer's path and content
//! - [`Position`] / [`Range`]: zero-based row/column coordinates
//! - pure mapping from char offsets and 1-based line/column pairs into
//!   those coordinates
//!
//! Everything here is pure and side-effect free so the position logic can
//! be unit tested without a live editor buffer.

mod document;
mod position;

pub use document::Document;
pub use position::{Position, Range, position_at_offset, range_at_offsets};
