use serde::{Deserialize, Serialize};
use std::path::Path;

/// Font container formats the app accepts, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFormat {
    Ttf,
    Otf,
    Woff,
    Woff2,
}

impl FontFormat {
    /// Extension filter for a file picker, in presentation order.
    pub const ACCEPT_LIST: &'static str = ".ttf,.otf,.woff,.woff2";

    pub fn from_extension(extension: &str) -> Option<FontFormat> {
        match extension.to_ascii_lowercase().as_str() {
            "ttf" => Some(FontFormat::Ttf),
            "otf" => Some(FontFormat::Otf),
            "woff" => Some(FontFormat::Woff),
            "woff2" => Some(FontFormat::Woff2),
            _ => None,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Option<FontFormat> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(FontFormat::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FontFormat::Ttf => "ttf",
            FontFormat::Otf => "otf",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
        }
    }

    /// Uppercase label shown in the metadata panel.
    pub fn label(&self) -> &'static str {
        match self {
            FontFormat::Ttf => "TTF",
            FontFormat::Otf => "OTF",
            FontFormat::Woff => "WOFF",
            FontFormat::Woff2 => "WOFF2",
        }
    }

    /// Format keyword for the `src` clause of an `@font-face` rule.
    pub fn css_format(&self) -> &'static str {
        match self {
            FontFormat::Ttf => "truetype",
            FontFormat::Otf => "opentype",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
        }
    }

    /// Whether the sfnt introspector understands this container. Compressed
    /// woff wrappers are handed to the renderer as-is, never introspected.
    pub fn is_introspectable(&self) -> bool {
        matches!(self, FontFormat::Ttf | FontFormat::Otf)
    }
}
