use crate::axis::VariableAxis;
use crate::format::FontFormat;
use std::fmt::Display;

/// Family name under which the loaded font is registered, so specimen CSS
/// can reference it without clashing with system fonts.
pub const LOADED_FONT_FAMILY: &str = "ProofsheetLoadedFont";

/// `font-variation-settings` value for the current axis positions, like
/// `"wght" 700, "wdth" 82.5`. A font with no axes gets `normal`.
pub fn variation_settings(axes: &[VariableAxis]) -> String {
    if axes.is_empty() {
        return "normal".to_string();
    }
    axes.iter()
        .map(|axis| format!("\"{}\" {}", axis.tag, axis.current))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `font-feature-settings` value for a set of feature toggles, like
/// `"liga" 1, "ss01" 0`. No toggles means `normal`.
pub fn feature_settings<K: Display>(features: impl IntoIterator<Item = (K, bool)>) -> String {
    let parts: Vec<String> = features
        .into_iter()
        .map(|(tag, on)| single_feature_setting(tag, on))
        .collect();
    if parts.is_empty() {
        "normal".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn single_feature_setting(tag: impl Display, on: bool) -> String {
    format!("\"{}\" {}", tag, u8::from(on))
}

/// A complete `@font-face` rule for the given source. The format clause is
/// omitted when the container type is unknown.
pub fn font_face_rule(family: &str, source_url: &str, format: Option<FontFormat>) -> String {
    let format_clause = format
        .map(|f| format!(" format(\"{}\")", f.css_format()))
        .unwrap_or_default();
    format!(
        "@font-face {{\n  font-family: \"{}\";\n  src: url(\"{}\"){};\n  font-display: block;\n}}",
        family, source_url, format_clause
    )
}
