use crate::block::BlockType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named way of looking at the specimen.
///
/// Most views filter the canonical block run down to a themed subset; `All`
/// and `Custom` show the whole run, and the inspector/proofing views show no
/// specimen blocks at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    All,
    Custom,
    Headlines,
    Text,
    Adhesion,
    #[serde(rename = "A-Z")]
    Alphabet,
    Words,
    Caps,
    Spacing,
    Layout,
    Lettering,
    Kern,
    Hinting,
    Latin,
    World,
    GlyphInspector,
    Proofing,
}

/// The registry of specimen blocks: a single hand-curated display order and
/// a per-view registration table.
///
/// Views may only reference blocks from the canonical order. A view with no
/// registration resolves to an empty block list rather than an error, so a
/// stale view id coming back from the UI degrades to "nothing to show".
#[derive(Debug, Clone)]
pub struct BlockCatalog {
    order: Vec<BlockType>,
    views: IndexMap<View, Vec<BlockType>>,
}

// Latin is deliberately absent: it exists only as a view over Text and
// Alphabet, not as a block of its own.
pub const CANONICAL_ORDER: [BlockType; 13] = [
    BlockType::Hero,
    BlockType::Adhesion,
    BlockType::Caps,
    BlockType::Spacing,
    BlockType::Kern,
    BlockType::Words,
    BlockType::Alphabet,
    BlockType::Text,
    BlockType::Headlines,
    BlockType::Layout,
    BlockType::Lettering,
    BlockType::Hinting,
    BlockType::World,
];

impl Default for BlockCatalog {
    fn default() -> Self {
        let order = CANONICAL_ORDER.to_vec();
        let mut views = IndexMap::new();
        views.insert(View::All, order.clone());
        views.insert(View::Custom, order.clone());
        views.insert(View::Headlines, vec![BlockType::Hero, BlockType::Headlines]);
        views.insert(View::Text, vec![BlockType::Text]);
        views.insert(View::Adhesion, vec![BlockType::Adhesion, BlockType::Kern]);
        views.insert(View::Alphabet, vec![BlockType::Alphabet]);
        views.insert(View::Words, vec![BlockType::Words]);
        views.insert(View::Caps, vec![BlockType::Caps]);
        views.insert(View::Spacing, vec![BlockType::Spacing]);
        views.insert(View::Layout, vec![BlockType::Layout]);
        views.insert(View::Lettering, vec![BlockType::Lettering]);
        views.insert(View::Kern, vec![BlockType::Adhesion, BlockType::Kern]);
        views.insert(View::Hinting, vec![BlockType::Hinting]);
        views.insert(View::Latin, vec![BlockType::Text, BlockType::Alphabet]);
        views.insert(View::World, vec![BlockType::World]);
        BlockCatalog { order, views }
    }
}

impl BlockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full display order of the specimen, independent of any view.
    pub fn canonical_order(&self) -> &[BlockType] {
        &self.order
    }

    /// The blocks a view shows, in display order. Unregistered views give
    /// an empty list.
    pub fn blocks_for_view(&self, view: View) -> Vec<BlockType> {
        self.views.get(&view).cloned().unwrap_or_default()
    }

    /// Register (or replace) the block list for a view. The blocks should
    /// come from the canonical order; chiefly useful for `View::Custom`.
    pub fn register_view(&mut self, view: View, blocks: Vec<BlockType>) {
        self.views.insert(view, blocks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_view_is_the_canonical_order() {
        let catalog = BlockCatalog::new();
        assert_eq!(
            catalog.blocks_for_view(View::All),
            catalog.canonical_order().to_vec()
        );
        assert_eq!(catalog.canonical_order().len(), 13);
    }

    #[test]
    fn test_filter_views_are_subsets_in_order() {
        let catalog = BlockCatalog::new();
        assert_eq!(
            catalog.blocks_for_view(View::Kern),
            vec![BlockType::Adhesion, BlockType::Kern]
        );
        assert_eq!(
            catalog.blocks_for_view(View::Latin),
            vec![BlockType::Text, BlockType::Alphabet]
        );
        assert_eq!(catalog.blocks_for_view(View::Spacing), vec![BlockType::Spacing]);
    }

    #[test]
    fn test_every_view_references_only_canonical_blocks() {
        let catalog = BlockCatalog::new();
        for (_, blocks) in catalog.views.iter() {
            for block in blocks {
                assert!(catalog.order.contains(block), "{block} is not canonical");
            }
        }
    }

    #[test]
    fn test_unregistered_view_is_empty_not_an_error() {
        let catalog = BlockCatalog::new();
        assert!(catalog.blocks_for_view(View::GlyphInspector).is_empty());
        assert!(catalog.blocks_for_view(View::Proofing).is_empty());
    }

    #[test]
    fn test_custom_view_can_be_reregistered() {
        let mut catalog = BlockCatalog::new();
        catalog.register_view(View::Custom, vec![BlockType::Hero, BlockType::World]);
        assert_eq!(
            catalog.blocks_for_view(View::Custom),
            vec![BlockType::Hero, BlockType::World]
        );
    }
}
