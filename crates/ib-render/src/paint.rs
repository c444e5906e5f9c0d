//! Board model → paint descriptions.
//!
//! The display surface draws what it is given: a body rectangle with its
//! handle, border and fill colours, and opacity for each box; a straight
//! line (with SVG path data) for each wire. Geometry is built with `kurbo`.

use ib_core::geom;
use ib_core::model::DragState;
use ib_core::{BoxId, BoxNode, Wire, WireId};
use kurbo::{Line, Point, Rect, Shape};
use serde::Serialize;

pub const BORDER_COLOR: &str = "#eacbab";
pub const BORDER_HOT_COLOR: &str = "#c00";
pub const FILL_COLOR: &str = "#fff3e1";
pub const FILL_HOT_COLOR: &str = "#c00";
pub const WIRE_COLOR: &str = "#8e633f";
pub const WIRE_WIDTH: f64 = 2.0;
/// Opacity of a box while it is being dragged.
pub const DRAG_OPACITY: f32 = 0.3;

/// Flattening tolerance for SVG path output.
const PATH_TOLERANCE: f64 = 0.1;

/// A rectangle in plain numbers, ready for the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectPaint {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for RectPaint {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x0,
            y: r.y0,
            width: r.width(),
            height: r.height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPaint {
    pub id: BoxId,
    pub body: RectPaint,
    pub handle: RectPaint,
    pub content: String,
    pub border: &'static str,
    pub fill: &'static str,
    pub opacity: f32,
    /// Body outline under the pointer while the box is dragged.
    pub ghost: Option<RectPaint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WirePaint {
    pub id: WireId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// SVG path data of the line.
    pub path: String,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

fn to_kurbo(r: &ib_core::Rect) -> Rect {
    Rect::from_origin_size(
        (f64::from(r.x), f64::from(r.y)),
        (f64::from(r.width), f64::from(r.height)),
    )
}

/// Describe how a box looks right now.
pub fn paint_box(node: &BoxNode, handle_size: f32) -> BoxPaint {
    let body = to_kurbo(&node.rect);
    let handle = to_kurbo(&geom::handle_rect(&node.rect, handle_size));
    let opacity = if node.is_dragging() { DRAG_OPACITY } else { 1.0 };
    let ghost = match node.drag {
        DragState::Dragging { grab, pointer } => Some(
            Rect::from_origin_size(
                (f64::from(pointer.x - grab.dx), f64::from(pointer.y - grab.dy)),
                body.size(),
            )
            .into(),
        ),
        DragState::Idle => None,
    };
    log::trace!(
        "PAINT box {} at ({}, {}) opacity {opacity}",
        node.id,
        body.x0,
        body.y0
    );
    BoxPaint {
        id: node.id,
        body: body.into(),
        handle: handle.into(),
        content: node.content.clone(),
        border: if node.hover.border_hot {
            BORDER_HOT_COLOR
        } else {
            BORDER_COLOR
        },
        fill: if node.hover.fill_hot {
            FILL_HOT_COLOR
        } else {
            FILL_COLOR
        },
        opacity,
        ghost,
    }
}

/// Describe a wire from its cached endpoints.
pub fn paint_wire(wire: &Wire) -> WirePaint {
    let line = Line::new(
        Point::new(f64::from(wire.start_point.x), f64::from(wire.start_point.y)),
        Point::new(f64::from(wire.end_point.x), f64::from(wire.end_point.y)),
    );
    log::trace!("PAINT {} {} -> {}", wire.id, wire.start_id, wire.end_id);
    WirePaint {
        id: wire.id,
        x1: line.p0.x,
        y1: line.p0.y,
        x2: line.p1.x,
        y2: line.p1.y,
        path: line.to_path(PATH_TOLERANCE).to_svg(),
        stroke: WIRE_COLOR,
        stroke_width: WIRE_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ib_core::model::{DragState, Hover};
    use ib_core::{Anchor, Vector};
    use pretty_assertions::assert_eq;

    fn node() -> BoxNode {
        BoxNode::new(
            BoxId::intern("paint"),
            ib_core::Rect::new(100.0, 50.0, 250.0, 150.0),
            "text",
        )
        .unwrap()
    }

    #[test]
    fn idle_box_uses_default_look() {
        let p = paint_box(&node(), 40.0);
        assert_eq!(
            p.body,
            RectPaint {
                x: 100.0,
                y: 50.0,
                width: 250.0,
                height: 150.0
            }
        );
        assert_eq!(
            p.handle,
            RectPaint {
                x: 60.0,
                y: 50.0,
                width: 40.0,
                height: 40.0
            }
        );
        assert_eq!(p.border, BORDER_COLOR);
        assert_eq!(p.fill, FILL_COLOR);
        assert_eq!(p.opacity, 1.0);
        assert_eq!(p.ghost, None);
    }

    #[test]
    fn hover_and_drag_change_the_look() {
        let mut n = node();
        n.hover = Hover {
            border_hot: true,
            fill_hot: true,
        };
        n.drag = DragState::Dragging {
            grab: Vector::new(10.0, 5.0),
            pointer: ib_core::Point::new(300.0, 400.0),
        };
        let p = paint_box(&n, 40.0);
        assert_eq!(p.border, BORDER_HOT_COLOR);
        assert_eq!(p.fill, FILL_HOT_COLOR);
        assert_eq!(p.opacity, DRAG_OPACITY);
        assert_eq!(
            p.ghost,
            Some(RectPaint {
                x: 290.0,
                y: 395.0,
                width: 250.0,
                height: 150.0
            })
        );
        // The committed body stays where it was until the drop.
        assert_eq!(p.body.x, 100.0);
    }

    #[test]
    fn wire_paint_follows_cached_points() {
        let wire = Wire::new(
            WireId(7),
            Anchor::new(BoxId::intern("a"), ib_core::Point::new(0.0, 0.0)),
            Anchor::new(BoxId::intern("b"), ib_core::Point::new(10.0, 20.0)),
        );
        let p = paint_wire(&wire);
        assert_eq!((p.x1, p.y1, p.x2, p.y2), (0.0, 0.0, 10.0, 20.0));
        assert!(p.path.starts_with('M'));
        assert!(p.path.contains('L'));
        assert_eq!(p.stroke, WIRE_COLOR);
    }
}
