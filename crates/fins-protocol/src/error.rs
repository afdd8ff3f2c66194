//! Error types for FINS frame dissection

use thiserror::Error;

/// Errors raised by cursor reads over a frame buffer.
///
/// Shape checks precede every read in the shipped body parsers, so a
/// truncated read should never fire for a well-behaved shape; it exists so
/// a parser that skips its check still fails closed instead of reading out
/// of bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// A read needed more bytes than the frame has left
    #[error("truncated read at offset {offset}: wanted {wanted} bytes, {available} available")]
    Truncated {
        offset: usize,
        wanted: usize,
        available: usize,
    },
}
