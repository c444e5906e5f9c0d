//! Rendering side of the board: what the core asks the display surface to
//! do, how boxes and wires look, and which box a pointer is over.

pub mod hit;
pub mod paint;
pub mod sink;

pub use sink::{MountRegistry, RenderSink, SinkOp, Visual};
