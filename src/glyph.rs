use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::ops::{Deref, DerefMut};

/// Name of the fallback glyph at index zero.
pub const NOTDEF: &str = ".notdef";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphInfo {
    pub name: SmolStr,
    /// First codepoint mapped to this glyph by the character map, or zero
    /// when nothing maps to it.
    pub codepoint: u32,
    pub index: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphTable(pub Vec<GlyphInfo>);

impl GlyphTable {
    pub fn get(&self, name: &str) -> Option<&GlyphInfo> {
        self.0.iter().find(|glyph| glyph.name == name)
    }

    pub fn get_by_index(&self, index: u32) -> Option<&GlyphInfo> {
        self.0.get(index as usize)
    }

    pub fn get_by_codepoint(&self, codepoint: u32) -> Option<&GlyphInfo> {
        self.0.iter().find(|glyph| glyph.codepoint == codepoint)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlyphInfo> {
        self.0.iter()
    }

    /// True when rendering this codepoint would show a tofu: either nothing
    /// in the table covers it, or it lands on the notdef slot.
    pub fn is_missing_or_empty(&self, codepoint: u32) -> bool {
        match self.get_by_codepoint(codepoint) {
            Some(glyph) => glyph.index == 0 || glyph.name == NOTDEF,
            None => true,
        }
    }

    /// Characters of `text` the font cannot show, deduplicated in order of
    /// first appearance.
    pub fn missing_chars(&self, text: &str) -> Vec<char> {
        let mut missing = IndexSet::new();
        for c in text.chars() {
            if self.is_missing_or_empty(c as u32) {
                missing.insert(c);
            }
        }
        missing.into_iter().collect()
    }
}

impl Deref for GlyphTable {
    type Target = Vec<GlyphInfo>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for GlyphTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
