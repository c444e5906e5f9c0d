pub mod config;
pub mod error;
pub mod geom;
pub mod id;
pub mod model;
pub mod snapshot;

pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use geom::{Point, Rect, Vector};
pub use id::{BoxId, WireId};
pub use model::*;
pub use snapshot::{BoardSnapshot, BoxRecord};
