use crate::block::BlockType;
use crate::catalog::{BlockCatalog, View};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Normalized capacity of one printed sheet. Block weights are fractions of
/// this.
pub const PAGE_CAPACITY: f64 = 1.0;

/// One printed sheet: a contiguous run of blocks from the view's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page(pub Vec<BlockType>);

impl Page {
    pub fn iter(&self) -> std::slice::Iter<'_, BlockType> {
        self.0.iter()
    }

    /// Sum of the weights of the blocks on this page.
    pub fn weight(&self) -> f64 {
        self.0.iter().map(|b| weight_of(*b)).sum()
    }
}

impl Deref for Page {
    type Target = Vec<BlockType>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for Page {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// The vertical share of a sheet a block occupies, in `(0, 1]`.
///
/// These are tuning constants: a block heavier than the leftovers of the
/// current sheet starts a new one. Changing a weight re-balances the sheets
/// but never reorders blocks.
pub fn weight_of(block: BlockType) -> f64 {
    match block {
        BlockType::Hero => 0.5,
        BlockType::Adhesion => 0.25,
        BlockType::Caps => 0.3,
        BlockType::Spacing => 0.35,
        BlockType::Kern => 0.15,
        BlockType::Words => 0.3,
        BlockType::Alphabet => 0.5,
        BlockType::Text => 0.4,
        BlockType::Headlines => 0.35,
        BlockType::Layout => 0.6,
        BlockType::Lettering => 0.35,
        BlockType::Hinting => 0.25,
        BlockType::Latin => 0.5,
        BlockType::World => 0.45,
    }
}

/// Split a block run into sheets greedily, keeping input order.
///
/// A sheet is closed as soon as the next block would overflow it; a block
/// heavier than the whole capacity still gets a sheet of its own. The empty
/// run yields a single empty sheet, so every view has at least one page.
pub fn paginate_with_capacity(blocks: &[BlockType], capacity: f64) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut current: Vec<BlockType> = Vec::new();
    let mut current_weight = 0.0;
    for &block in blocks {
        let w = weight_of(block);
        if !current.is_empty() && current_weight + w > capacity {
            pages.push(Page(std::mem::take(&mut current)));
            current_weight = 0.0;
        }
        current.push(block);
        current_weight += w;
    }
    pages.push(Page(current));
    pages
}

/// [`paginate_with_capacity`] at the standard sheet capacity.
pub fn paginate(blocks: &[BlockType]) -> Vec<Page> {
    paginate_with_capacity(blocks, PAGE_CAPACITY)
}

/// How many sheets a view occupies. Never less than one, even for views
/// that show nothing.
pub fn total_pages(catalog: &BlockCatalog, view: View) -> usize {
    paginate(&catalog.blocks_for_view(view)).len().max(1)
}

/// The blocks on one sheet of a view. An out-of-range index (from a stale
/// or garbled UI state) is clamped to the nearest valid sheet.
pub fn current_page_blocks(catalog: &BlockCatalog, view: View, page_index: i64) -> Vec<BlockType> {
    let pages = paginate(&catalog.blocks_for_view(view));
    let last = (pages.len() - 1) as i64;
    let index = page_index.clamp(0, last) as usize;
    pages[index].0.clone()
}
