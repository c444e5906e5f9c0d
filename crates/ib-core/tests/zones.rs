//! Integration tests: zone predicates against configured box sizes.
//!
//! Exercises the geometry the way the editor does: boxes sized from
//! `BoardConfig`, zones measured with the configured margins.

use ib_core::geom::{contains_point, in_action_zone, in_delete_zone, on_handle};
use ib_core::{BoardConfig, BoxId, BoxNode, Rect};

fn config_box(x: f32, y: f32) -> (BoardConfig, BoxNode) {
    let config = BoardConfig::default();
    let node = BoxNode::new(
        BoxId::intern("zone-box"),
        Rect::new(x, y, config.width, config.height),
        "",
    )
    .unwrap();
    (config, node)
}

// ─── Containment ─────────────────────────────────────────────────────────

#[test]
fn contains_point_examples() {
    let r = Rect::new(100.0, 100.0, 250.0, 150.0);
    assert!(contains_point(&r, 150.0, 150.0));
    assert!(!contains_point(&r, 50.0, 50.0));
}

// ─── Delete zone ─────────────────────────────────────────────────────────

#[test]
fn delete_zone_depends_on_margin() {
    let r = Rect::new(0.0, 0.0, 250.0, 150.0);
    assert!(in_delete_zone(&r, 240.0, 5.0, 20.0));
    assert!(!in_delete_zone(&r, 240.0, 5.0, 10.0));
}

#[test]
fn delete_zone_lies_inside_action_zone() {
    let (config, node) = config_box(300.0, 200.0);
    let m = config.delete_zone_margin;
    // Sample the delete square; every hit is also an action-zone hit,
    // which is why pointer-down checks delete first.
    for i in 1..10 {
        let px = node.rect.right() - m * i as f32 / 10.0;
        let py = node.rect.y + m * i as f32 / 10.0;
        assert!(node.in_delete_zone(px, py, m));
        assert!(node.in_action_zone(px, py, config.action_zone_margin));
    }
}

// ─── Handle ──────────────────────────────────────────────────────────────

#[test]
fn handle_is_disjoint_from_every_zone() {
    let (config, node) = config_box(300.0, 200.0);
    let h = config.handle_size;
    for i in 1..h as i32 {
        for j in 1..h as i32 {
            let px = node.rect.x - h + i as f32;
            let py = node.rect.y + j as f32;
            assert!(on_handle(&node.rect, px, py, h));
            assert!(!contains_point(&node.rect, px, py));
            assert!(!in_action_zone(&node.rect, px, py, config.action_zone_margin));
            assert!(!in_delete_zone(&node.rect, px, py, config.delete_zone_margin));
        }
    }
}
