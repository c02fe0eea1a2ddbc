use serde::{Deserialize, Serialize};
use std::fmt;

/// One curated section of a specimen sheet.
///
/// The set is fixed: these are the thirteen printable sections of the
/// specimen (plus [`BlockType::Latin`], which only ever appears as a view
/// filter, never in the canonical run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockType {
    Hero,
    Adhesion,
    Caps,
    Spacing,
    Kern,
    Words,
    #[serde(rename = "A-Z")]
    Alphabet,
    Text,
    Headlines,
    Layout,
    Lettering,
    Hinting,
    Latin,
    World,
}

impl BlockType {
    /// The stable string id of this block, as used in persisted state.
    pub fn id(&self) -> &'static str {
        match self {
            BlockType::Hero => "HERO",
            BlockType::Adhesion => "ADHESION",
            BlockType::Caps => "CAPS",
            BlockType::Spacing => "SPACING",
            BlockType::Kern => "KERN",
            BlockType::Words => "WORDS",
            BlockType::Alphabet => "A-Z",
            BlockType::Text => "TEXT",
            BlockType::Headlines => "HEADLINES",
            BlockType::Layout => "LAYOUT",
            BlockType::Lettering => "LETTERING",
            BlockType::Hinting => "HINTING",
            BlockType::Latin => "LATIN",
            BlockType::World => "WORLD",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
