use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for box IDs — fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Prefix of generated box ids (`box-0`, `box-1`, ...).
pub const BOX_ID_PREFIX: &str = "box-";

/// Interned identifier of a box on the board.
/// Internally a `Spur` index — 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxId(Spur);

impl BoxId {
    /// Intern a string as a BoxId, or return the existing one.
    pub fn intern(s: &str) -> Self {
        BoxId(INTERNER.get_or_intern(s))
    }

    /// Id for the `n`-th generated box of a session.
    pub fn numbered(n: u64) -> Self {
        Self::intern(&format!("{BOX_ID_PREFIX}{n}"))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Debug for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BoxId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BoxId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(BoxId::intern(&s))
    }
}

/// Handle of a wire's visual element.
///
/// Several wires may join the same ordered pair of boxes, so the pair
/// cannot name a wire on the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireId(pub u64);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wire-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = BoxId::intern("box-3");
        let b = BoxId::intern("box-3");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "box-3");
    }

    #[test]
    fn numbered_ids_follow_box_prefix() {
        assert_eq!(BoxId::numbered(0).as_str(), "box-0");
        assert_eq!(BoxId::numbered(12), BoxId::intern("box-12"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&BoxId::intern("box-9")).unwrap();
        assert_eq!(json, "\"box-9\"");
        let back: BoxId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BoxId::intern("box-9"));
    }
}
