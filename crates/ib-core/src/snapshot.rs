//! Saved board state.
//!
//! The snapshot lists boxes only, in creation order, with the fields
//! `x, y, id, content`. Wires are not part of it.

use crate::error::Result;
use crate::id::BoxId;
use crate::model::BoxNode;
use serde::{Deserialize, Serialize};

/// One exported box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxRecord {
    pub x: f32,
    pub y: f32,
    pub id: BoxId,
    pub content: String,
}

impl From<&BoxNode> for BoxRecord {
    fn from(node: &BoxNode) -> Self {
        Self {
            x: node.rect.x,
            y: node.rect.y,
            id: node.id,
            content: node.content.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub boxes: Vec<BoxRecord>,
}

impl BoardSnapshot {
    pub fn from_boxes<'a>(boxes: impl IntoIterator<Item = &'a BoxNode>) -> Self {
        Self {
            boxes: boxes.into_iter().map(BoxRecord::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;

    #[test]
    fn json_field_order_matches_saved_format() {
        let node = BoxNode::new(BoxId::intern("box-0"), Rect::new(320.0, 180.0, 250.0, 150.0), "hi").unwrap();
        let json = BoardSnapshot::from_boxes([&node]).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"boxes":[{"x":320.0,"y":180.0,"id":"box-0","content":"hi"}]}"#
        );
    }

    #[test]
    fn parses_saved_state() {
        let snap = BoardSnapshot::from_json(
            r#"{"boxes":[{"x":1,"y":2,"id":"box-4","content":"a"},{"x":3,"y":4,"id":"n","content":""}]}"#,
        )
        .unwrap();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.boxes[0].id.as_str(), "box-4");
        assert_eq!(snap.boxes[1].y, 4.0);
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(BoardSnapshot::from_json(r#"{"boxes":[{"x":1,"id":"b","content":""}]}"#).is_err());
    }
}
