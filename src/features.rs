use indexmap::IndexMap;
use skrifa::Tag;
use std::ops::{Deref, DerefMut};

/// OpenType features worth a toggle in the UI, offered whenever a font
/// declares no GSUB features of its own. Ligatures and kerning first, then
/// figure styles, stylistic sets, caps, and the long tail.
pub const COMMON_FEATURE_TAGS: [Tag; 39] = [
    Tag::new(b"liga"),
    Tag::new(b"kern"),
    Tag::new(b"calt"),
    Tag::new(b"clig"),
    Tag::new(b"dlig"),
    Tag::new(b"hlig"),
    Tag::new(b"rlig"),
    Tag::new(b"tnum"),
    Tag::new(b"onum"),
    Tag::new(b"lnum"),
    Tag::new(b"pnum"),
    Tag::new(b"ss01"),
    Tag::new(b"ss02"),
    Tag::new(b"ss03"),
    Tag::new(b"ss04"),
    Tag::new(b"ss05"),
    Tag::new(b"ss06"),
    Tag::new(b"ss07"),
    Tag::new(b"ss08"),
    Tag::new(b"ss09"),
    Tag::new(b"ss10"),
    Tag::new(b"ss11"),
    Tag::new(b"smcp"),
    Tag::new(b"c2sc"),
    Tag::new(b"pcap"),
    Tag::new(b"c2pc"),
    Tag::new(b"frac"),
    Tag::new(b"ordn"),
    Tag::new(b"sups"),
    Tag::new(b"subs"),
    Tag::new(b"sinf"),
    Tag::new(b"swsh"),
    Tag::new(b"cswh"),
    Tag::new(b"salt"),
    Tag::new(b"styl"),
    Tag::new(b"titl"),
    Tag::new(b"aalt"),
    Tag::new(b"case"),
    Tag::new(b"locl"),
];

/// On/off state for every feature offered to the user, in presentation
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSettings(pub IndexMap<Tag, bool>);

impl FeatureSettings {
    pub fn new() -> Self {
        FeatureSettings(IndexMap::new())
    }

    /// Seed toggles for the given tags. Ligatures and kerning start on,
    /// matching how browsers render text with no explicit settings.
    pub fn seed(tags: &[Tag]) -> Self {
        let mut settings = IndexMap::with_capacity(tags.len());
        for &tag in tags {
            let on = tag == Tag::new(b"liga") || tag == Tag::new(b"kern");
            settings.insert(tag, on);
        }
        FeatureSettings(settings)
    }

    /// Flip a feature. A tag not yet tracked is treated as off, so its
    /// first toggle turns it on.
    pub fn toggle(&mut self, tag: Tag) {
        let on = self.0.entry(tag).or_insert(false);
        *on = !*on;
    }

    pub fn set(&mut self, tag: Tag, on: bool) {
        self.0.insert(tag, on);
    }

    pub fn is_on(&self, tag: Tag) -> bool {
        self.0.get(&tag).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, bool)> + '_ {
        self.0.iter().map(|(tag, on)| (*tag, *on))
    }
}

impl Deref for FeatureSettings {
    type Target = IndexMap<Tag, bool>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for FeatureSettings {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
