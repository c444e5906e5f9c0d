//! Error type shared by the board crates.
//!
//! Only boundary failures are errors: bad configuration, unreadable
//! snapshots, and wiring mistakes in the host. Malformed pointer input and
//! no-op requests are absorbed by the managers and never reach this type.

use crate::id::BoxId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("box {id} must have a positive size, got {width}x{height}")]
    InvalidSize { id: BoxId, width: f32, height: f32 },

    #[error("box {id} must have a finite position, got ({x}, {y})")]
    InvalidPosition { id: BoxId, x: f32, y: f32 },

    #[error("box id {0} was already used in this session")]
    DuplicateId(BoxId),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognized event kind `{0}`")]
    UnknownEvent(String),
}

pub type Result<T, E = BoardError> = std::result::Result<T, E>;
