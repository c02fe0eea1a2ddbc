use crate::axis::VariableAxis;
use crate::content;
use crate::style;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use uuid::Uuid;

/// A free-form proofing paragraph. Each block carries its own axis and
/// feature overrides on top of the session's live settings, keyed by tag
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofingBlock {
    pub id: Uuid,
    pub text: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub axis_overrides: IndexMap<SmolStr, f32>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub feature_overrides: IndexMap<SmolStr, bool>,
}

impl ProofingBlock {
    pub fn new(text: impl Into<String>) -> Self {
        ProofingBlock {
            id: Uuid::new_v4(),
            text: text.into(),
            axis_overrides: IndexMap::new(),
            feature_overrides: IndexMap::new(),
        }
    }

    /// A copy of this block under a fresh id.
    pub fn duplicate(&self) -> Self {
        ProofingBlock {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }

    /// Flip a per-block feature override. A tag with no override yet starts
    /// from off, so its first toggle switches it on.
    pub fn toggle_feature(&mut self, tag: &str) {
        let on = self.feature_overrides.entry(SmolStr::new(tag)).or_insert(false);
        *on = !*on;
    }

    pub fn set_axis_override(&mut self, tag: &str, value: f32) {
        self.axis_overrides.insert(SmolStr::new(tag), value);
    }

    /// Drop an override so the block follows the live axis position again.
    pub fn clear_axis_override(&mut self, tag: &str) {
        self.axis_overrides.shift_remove(tag);
    }

    /// `font-variation-settings` for this block. Every session axis is
    /// listed; an override wins over the live slider position.
    pub fn variation_settings(&self, axes: &[VariableAxis]) -> String {
        if axes.is_empty() {
            return "normal".to_string();
        }
        axes.iter()
            .map(|axis| {
                let value = self
                    .axis_overrides
                    .get(axis.tag.to_string().as_str())
                    .copied()
                    .unwrap_or(axis.current);
                format!("\"{}\" {}", axis.tag, value)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `font-feature-settings` built from this block's overrides alone.
    pub fn feature_settings(&self) -> String {
        style::feature_settings(self.feature_overrides.iter().map(|(tag, on)| (tag, *on)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresetOption {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresetCategory {
    pub label: &'static str,
    pub options: Vec<PresetOption>,
}

fn option(label: &'static str, value: impl Into<String>) -> PresetOption {
    PresetOption {
        label,
        value: value.into(),
    }
}

/// The proofing library: canned strings a block can be filled from, grouped
/// the way the preset picker shows them.
pub fn proofing_presets() -> Vec<PresetCategory> {
    vec![
        PresetCategory {
            label: "Character Sets",
            options: vec![
                option("Uppercase", content::CAPS_SAMPLE),
                option("Lowercase", content::LOWERCASE_SAMPLE),
                option("Figures", content::CHARS_NUMERALS),
                option("Punctuation", ".,;:!?\"'–—()[]{}"),
            ],
        },
        PresetCategory {
            label: "Spacing Strings",
            options: vec![
                option("nnnnnononoooo", "nnnnnononoooo"),
                option("HHHHHOHOHOOOOO", "HHHHHOHOHOOOOO"),
                option("HnndHnnoHoonHddn", "HnndHnnoHoonHddn"),
                option(
                    "Spacing: lowercase (nn/oo) – sample",
                    content::SPACING_COMBS_LOWERCASE[0],
                ),
                option(
                    "Spacing: uppercase (HH/OO) – sample",
                    content::SPACING_COMBS_UPPERCASE[0],
                ),
                option(
                    "Spacing: lowercase (nn/oo) full",
                    content::SPACING_COMBS_LOWERCASE.join("\n"),
                ),
                option(
                    "Spacing: uppercase (HH/OO) full",
                    content::SPACING_COMBS_UPPERCASE.join("\n"),
                ),
            ],
        },
        PresetCategory {
            label: "Kerning Pairs",
            options: vec![
                option(
                    "Classic pairs (AT, AV, Fa, LO…)",
                    content::KERNING_CLASSIC.join(" "),
                ),
                option(
                    "Incidentals: letter + punctuation (f r v w y T V W Y)",
                    content::INCIDENTALS_LETTER_PUNCT.join(" "),
                ),
                option(
                    "Incidentals: w! w? f! f? guillemots",
                    content::INCIDENTALS_EXCLAM_QUEST.join(" "),
                ),
            ],
        },
        PresetCategory {
            label: "Sidebearing",
            options: vec![
                option("H + all (UC)", content::sidebearing_comb('H', 'A'..='Z')),
                option("n + all (LC)", content::sidebearing_comb('n', 'a'..='z')),
                option("o + all (LC)", content::sidebearing_comb('o', 'a'..='z')),
            ],
        },
        PresetCategory {
            label: "Hoefler Bounding",
            options: content::HOEFLER_BOUNDING
                .iter()
                .copied()
                .map(|pair| option(pair, pair))
                .collect(),
        },
        PresetCategory {
            label: "DNA Words",
            options: content::DNA_WORDS
                .iter()
                .copied()
                .map(|word| option(word, word))
                .collect(),
        },
        PresetCategory {
            label: "Words A–Z",
            options: vec![option(
                "A–Z words (Aaron…Zulu)",
                content::WORDS_AZ.join(" "),
            )],
        },
        PresetCategory {
            label: "Paragraphs",
            options: vec![
                option("Short (Kafka)", content::PARAGRAPH_SHORT),
                option("Typography", content::PARAGRAPH_TYPOGRAPHY),
                option("German specimen", content::PARAGRAPH_GERMAN),
                option("Ruder (multilingual)", content::PARAGRAPH_RUDER),
            ],
        },
    ]
}
