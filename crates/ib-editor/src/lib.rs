//! Interaction layer of the board.
//!
//! [`surface::Surface`] receives normalized input events and routes them to
//! the box under the pointer. Each box runs its own drag state machine
//! ([`entity`]); [`boxes::BoxManager`] owns the boxes and
//! [`wires::WireManager`] owns the wires, the pending connection, and the
//! propagation of box moves to cached wire endpoints.

pub mod boxes;
pub mod entity;
pub mod input;
pub mod surface;
pub mod wires;
