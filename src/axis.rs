use serde::{Deserialize, Serialize};
use skrifa::Tag;

/// A variation axis of the loaded font, together with the position the user
/// has dialled in. Positions are raw userspace values taken straight from the
/// slider; they are not validated against the `[min, max]` range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAxis {
    #[serde(
        serialize_with = "crate::serde_helpers::tag_ser",
        deserialize_with = "crate::serde_helpers::tag_de"
    )]
    pub tag: Tag,
    pub name: String,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub current: f32,
}

impl VariableAxis {
    pub fn new(tag: Tag, name: impl Into<String>, min: f32, default: f32, max: f32) -> Self {
        VariableAxis {
            tag,
            name: name.into(),
            min,
            max,
            default,
            current: default,
        }
    }

    /// True once the slider has been moved off the axis default.
    pub fn is_modified(&self) -> bool {
        self.current != self.default
    }

    pub fn reset(&mut self) {
        self.current = self.default;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn weight() -> VariableAxis {
        VariableAxis::new(Tag::new(b"wght"), "Weight", 100.0, 400.0, 900.0)
    }

    #[test]
    fn test_new_starts_at_default() {
        let axis = weight();
        assert_eq!(axis.current, 400.0);
        assert!(!axis.is_modified());
    }

    #[test]
    fn test_reset_returns_to_default() {
        let mut axis = weight();
        axis.current = 700.0;
        assert!(axis.is_modified());
        axis.reset();
        assert_eq!(axis.current, 400.0);
    }

    #[test]
    fn test_serde_tag_as_string() {
        let axis = weight();
        let json = serde_json::to_value(&axis).unwrap();
        assert_eq!(json["tag"], "wght");
        let back: VariableAxis = serde_json::from_value(json).unwrap();
        assert_eq!(back, axis);
    }

    #[test]
    fn test_serde_rejects_bad_tag() {
        let json = r#"{"tag":"toolong","name":"x","min":0.0,"max":1.0,"default":0.0,"current":0.0}"#;
        assert!(serde_json::from_str::<VariableAxis>(json).is_err());
    }
}
