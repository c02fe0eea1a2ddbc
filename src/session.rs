use crate::axis::VariableAxis;
use crate::error::ProofsheetError;
use crate::features::{FeatureSettings, COMMON_FEATURE_TAGS};
use crate::format::FontFormat;
use crate::glyph::GlyphTable;
use crate::opentype::{self, FontBlob, FontInfo};
use crate::style;
use serde::{Deserialize, Serialize};
use skrifa::Tag;
use std::path::Path;
use std::time::Duration;

/// How long the parse worker may run before a load is abandoned.
pub const PARSE_TIMEOUT: Duration = Duration::from_millis(4000);

/// Summary shown alongside a loaded font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontMetadata {
    pub family_name: String,
    pub glyph_count: u32,
    /// Uppercase container label, like `TTF`.
    pub file_type: String,
    pub file_size: u64,
    pub is_variable: bool,
}

#[derive(Debug, Clone)]
struct LoadedFont {
    blob: FontBlob,
    format: FontFormat,
    metadata: FontMetadata,
    axes: Vec<VariableAxis>,
    features: FeatureSettings,
    glyphs: GlyphTable,
}

/// At most one loaded font, with its live axis positions and feature
/// toggles. Loading builds the replacement completely before swapping it in,
/// so a failed load leaves the previous font untouched.
#[derive(Debug, Default)]
pub struct FontSession {
    font: Option<LoadedFont>,
}

impl FontSession {
    pub fn new() -> Self {
        FontSession::default()
    }

    /// Load a font from disk. The extension decides the container format; an
    /// unrecognised one fails before any IO happens.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), ProofsheetError> {
        let path = path.as_ref();
        let format =
            FontFormat::from_path(path).ok_or_else(|| ProofsheetError::UnknownFileType {
                path: path.to_path_buf(),
            })?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("font")
            .to_string();
        log::debug!("Loading {:?} as {}", path, format.label());
        let bytes = std::fs::read(path)?;
        self.load_bytes(&name, format, bytes)
    }

    /// Load a font already in memory. `name` is the source file name, used
    /// as the display name when the font has no usable family record.
    /// Compressed woff containers are registered without introspection.
    pub fn load_bytes(
        &mut self,
        name: &str,
        format: FontFormat,
        bytes: Vec<u8>,
    ) -> Result<(), ProofsheetError> {
        let file_size = bytes.len() as u64;
        let blob = FontBlob::new(bytes);
        let info = if format.is_introspectable() {
            Some(opentype::introspect_with_timeout(&blob, PARSE_TIMEOUT)?)
        } else {
            None
        };
        let loaded = assemble(name, format, file_size, blob, info);
        log::info!(
            "Loaded font {} ({} glyphs, {} axes)",
            loaded.metadata.family_name,
            loaded.metadata.glyph_count,
            loaded.axes.len()
        );
        // The swap is the last step; it drops the previous font's blob
        // handle.
        self.font = Some(loaded);
        Ok(())
    }

    /// Drop the loaded font and every setting tied to it.
    pub fn reset(&mut self) {
        self.font = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.font.is_some()
    }

    pub fn metadata(&self) -> Option<&FontMetadata> {
        self.font.as_ref().map(|f| &f.metadata)
    }

    pub fn format(&self) -> Option<FontFormat> {
        self.font.as_ref().map(|f| f.format)
    }

    pub fn blob(&self) -> Option<&FontBlob> {
        self.font.as_ref().map(|f| &f.blob)
    }

    pub fn axes(&self) -> &[VariableAxis] {
        self.font.as_ref().map_or(&[], |f| f.axes.as_slice())
    }

    pub fn features(&self) -> Option<&FeatureSettings> {
        self.font.as_ref().map(|f| &f.features)
    }

    pub fn glyphs(&self) -> Option<&GlyphTable> {
        self.font.as_ref().map(|f| &f.glyphs)
    }

    /// Move an axis slider. The value is stored as given, without clamping
    /// to the axis range; an unknown tag is ignored.
    pub fn set_axis_value(&mut self, tag: Tag, value: f32) {
        if let Some(font) = self.font.as_mut() {
            if let Some(axis) = font.axes.iter_mut().find(|a| a.tag == tag) {
                axis.current = value;
            }
        }
    }

    pub fn reset_axes(&mut self) {
        if let Some(font) = self.font.as_mut() {
            for axis in &mut font.axes {
                axis.reset();
            }
        }
    }

    /// Flip a feature toggle. With no font loaded this does nothing.
    pub fn toggle_feature(&mut self, tag: Tag) {
        if let Some(font) = self.font.as_mut() {
            font.features.toggle(tag);
        }
    }

    pub fn set_feature(&mut self, tag: Tag, on: bool) {
        if let Some(font) = self.font.as_mut() {
            font.features.set(tag, on);
        }
    }

    /// `font-variation-settings` for the live axis positions.
    pub fn variation_settings(&self) -> String {
        style::variation_settings(self.axes())
    }

    /// `font-feature-settings` for the live toggles.
    pub fn feature_settings(&self) -> String {
        match self.features() {
            Some(features) => style::feature_settings(features.iter()),
            None => "normal".to_string(),
        }
    }

    /// The `@font-face` rule registering the loaded font under
    /// [`style::LOADED_FONT_FAMILY`].
    pub fn font_face_rule(&self, source_url: &str) -> Option<String> {
        self.font.as_ref().map(|f| {
            style::font_face_rule(style::LOADED_FONT_FAMILY, source_url, Some(f.format))
        })
    }
}

fn assemble(
    name: &str,
    format: FontFormat,
    file_size: u64,
    blob: FontBlob,
    info: Option<FontInfo>,
) -> LoadedFont {
    let info = info.unwrap_or_else(|| FontInfo {
        family_name: String::new(),
        glyph_count: 0,
        axes: Vec::new(),
        feature_tags: Vec::new(),
        glyphs: GlyphTable::default(),
    });
    let family_name = {
        let family = info.family_name.trim();
        if family.is_empty() {
            display_name_from(name)
        } else {
            family.to_string()
        }
    };
    // A font that declares no features still gets the common set offered.
    let features = if info.feature_tags.is_empty() {
        FeatureSettings::seed(&COMMON_FEATURE_TAGS)
    } else {
        FeatureSettings::seed(&info.feature_tags)
    };
    let metadata = FontMetadata {
        family_name,
        glyph_count: info.glyph_count,
        file_type: format.label().to_string(),
        file_size,
        is_variable: !info.axes.is_empty(),
    };
    LoadedFont {
        blob,
        format,
        metadata,
        axes: info.axes,
        features,
        glyphs: info.glyphs,
    }
}

/// Display name derived from a file name: the last extension goes, dashes
/// and underscores read as spaces.
fn display_name_from(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    stem.replace(['-', '_'], " ")
}
