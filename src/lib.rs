#![deny(clippy::unwrap_used, clippy::expect_used)]

mod axis;
mod block;
mod catalog;
pub mod content;
mod error;
mod features;
mod format;
mod glyph;
pub mod opentype;
pub mod page;
mod paginate;
mod proofing;
mod serde_helpers;
mod session;
mod store;
pub mod style;

pub use crate::{
    axis::VariableAxis,
    block::BlockType,
    catalog::{BlockCatalog, View, CANONICAL_ORDER},
    error::ProofsheetError,
    features::{FeatureSettings, COMMON_FEATURE_TAGS},
    format::FontFormat,
    glyph::{GlyphInfo, GlyphTable, NOTDEF},
    opentype::{parse_with_timeout, FontBlob, FontInfo},
    paginate::{current_page_blocks, paginate, total_pages, weight_of, Page, PAGE_CAPACITY},
    proofing::{proofing_presets, PresetCategory, PresetOption, ProofingBlock},
    session::{FontMetadata, FontSession, PARSE_TIMEOUT},
    store::{ProofState, ProofStore},
};
pub use skrifa::Tag;
use std::path::PathBuf;

/// Load a font file into a fresh session.
pub fn load(filename: impl Into<PathBuf>) -> Result<FontSession, ProofsheetError> {
    let mut session = FontSession::new();
    session.load_file(filename.into())?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_unknown_extension() {
        match load("specimen.xyz") {
            Err(ProofsheetError::UnknownFileType { path }) => {
                assert_eq!(path, PathBuf::from("specimen.xyz"))
            }
            other => panic!("expected UnknownFileType, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            load("/nonexistent/specimen.ttf"),
            Err(ProofsheetError::IO(_))
        ));
    }
}
