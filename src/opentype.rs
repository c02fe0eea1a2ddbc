use crate::axis::VariableAxis;
use crate::error::ProofsheetError;
use crate::glyph::{GlyphInfo, GlyphTable, NOTDEF};
use indexmap::IndexSet;
use skrifa::raw::{ReadError, TableProvider};
use skrifa::string::StringId;
use skrifa::{FontRef, GlyphId, GlyphNames, MetadataProvider, Tag};
use smol_str::SmolStr;
use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

/// Shared handle to a loaded font's raw bytes. Clones share one buffer,
/// which is freed when the last handle drops, so a parse worker can outlive
/// the load that spawned it without copying the file.
#[derive(Debug, Clone, Default)]
pub struct FontBlob(Arc<Vec<u8>>);

impl FontBlob {
    pub fn new(bytes: Vec<u8>) -> Self {
        FontBlob(Arc::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of live handles to the underlying buffer.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

/// Everything the introspector reports about a parsed font.
#[derive(Debug, Clone, PartialEq)]
pub struct FontInfo {
    pub family_name: String,
    pub glyph_count: u32,
    pub axes: Vec<VariableAxis>,
    /// GSUB feature tags in first-seen order, the feature list ahead of
    /// any script-referenced extras. Empty when the font declares none, or
    /// when the GSUB table cannot be read.
    pub feature_tags: Vec<Tag>,
    pub glyphs: GlyphTable,
}

/// The family name from the name table, preferring the English record.
pub fn family_name(font: &FontRef) -> Option<String> {
    let name = font
        .localized_strings(StringId::FAMILY_NAME)
        .english_or_first()?
        .to_string();
    (!name.is_empty()).then_some(name)
}

/// Every fvar axis, with the slider parked at the axis default. Axes with an
/// unusable name record fall back to their tag.
pub fn extract_axes(font: &FontRef) -> Vec<VariableAxis> {
    font.axes()
        .iter()
        .map(|axis| {
            let name = font
                .localized_strings(axis.name_id())
                .english_or_first()
                .map(|s| s.to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| axis.tag().to_string());
            VariableAxis::new(
                axis.tag(),
                name,
                axis.min_value(),
                axis.default_value(),
                axis.max_value(),
            )
        })
        .collect()
}

/// Feature tags the GSUB table declares: the feature list in table order,
/// then anything further reachable through the script list, deduplicated in
/// first-seen order. A tag stays reported even when no script references
/// it. An unreadable or absent GSUB yields no tags at all; a script or
/// language system that fails to read is skipped without discarding the
/// rest.
pub fn extract_feature_tags(font: &FontRef) -> Vec<Tag> {
    match gsub_feature_tags(font) {
        Ok(tags) => tags,
        Err(e) => {
            log::debug!("No usable GSUB table: {}", e);
            Vec::new()
        }
    }
}

fn gsub_feature_tags(font: &FontRef) -> Result<Vec<Tag>, ReadError> {
    let gsub = font.gsub()?;
    let feature_list = gsub.feature_list()?;
    let features = feature_list.feature_records();
    let script_list = gsub.script_list()?;

    let mut tags = IndexSet::new();
    for feature in features {
        tags.insert(feature.feature_tag());
    }
    for record in script_list.script_records() {
        let script = match record.script(script_list.offset_data()) {
            Ok(script) => script,
            Err(_) => continue,
        };
        let mut lang_systems = Vec::new();
        if let Some(Ok(default)) = script.default_lang_sys() {
            lang_systems.push(default);
        }
        for ls_record in script.lang_sys_records() {
            if let Ok(lang_sys) = ls_record.lang_sys(script.offset_data()) {
                lang_systems.push(lang_sys);
            }
        }
        for lang_sys in lang_systems {
            for index in lang_sys.feature_indices() {
                if let Some(feature) = features.get(index.get() as usize) {
                    tags.insert(feature.feature_tag());
                }
            }
        }
    }
    Ok(tags.into_iter().collect())
}

/// One entry per glyph in the font, pairing each glyph with its name and the
/// first codepoint the character map sends to it.
pub fn extract_glyphs(font: &FontRef) -> GlyphTable {
    let names = GlyphNames::new(font);
    let mut codepoints: HashMap<u32, u32> = HashMap::new();
    for (codepoint, glyph) in font.charmap().mappings() {
        codepoints.entry(glyph.to_u32()).or_insert(codepoint);
    }
    assemble_glyphs(
        names.num_glyphs(),
        |index| {
            names
                .get(GlyphId::new(index))
                .map(|name| SmolStr::new(name.as_str()))
        },
        |index| codepoints.get(&index).copied(),
    )
}

fn assemble_glyphs(
    count: u32,
    name_of: impl Fn(u32) -> Option<SmolStr>,
    codepoint_of: impl Fn(u32) -> Option<u32>,
) -> GlyphTable {
    GlyphTable(
        (0..count)
            .map(|index| GlyphInfo {
                name: name_of(index).unwrap_or_else(|| SmolStr::new_static(NOTDEF)),
                codepoint: codepoint_of(index).unwrap_or(0),
                index,
            })
            .collect(),
    )
}

pub fn introspect(font: &FontRef) -> FontInfo {
    let glyphs = extract_glyphs(font);
    FontInfo {
        family_name: family_name(font).unwrap_or_default(),
        glyph_count: glyphs.len() as u32,
        axes: extract_axes(font),
        feature_tags: extract_feature_tags(font),
        glyphs,
    }
}

pub fn introspect_bytes(bytes: &[u8]) -> Result<FontInfo, ReadError> {
    let font = FontRef::new(bytes)?;
    Ok(introspect(&font))
}

#[derive(Debug, PartialEq, Eq)]
enum SettleError {
    TimedOut,
    Died,
}

/// Run `worker` on its own thread and wait at most `timeout` for it to send
/// a result. The first message settles the outcome; anything the worker does
/// afterwards, a second send, a panic, or finishing past the deadline, is
/// discarded at the channel.
fn settle_within<T, F>(timeout: Duration, worker: F) -> Result<T, SettleError>
where
    T: Send + 'static,
    F: FnOnce(mpsc::Sender<T>) + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || worker(tx));
    match rx.recv_timeout(timeout) {
        Ok(value) => Ok(value),
        Err(mpsc::RecvTimeoutError::Timeout) => Err(SettleError::TimedOut),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(SettleError::Died),
    }
}

/// Introspect on a worker thread, giving up at the deadline. The worker
/// holds its own handle to the blob, so an abandoned parse keeps the bytes
/// alive only until it finishes.
pub fn introspect_with_timeout(
    blob: &FontBlob,
    timeout: Duration,
) -> Result<FontInfo, ProofsheetError> {
    let data = blob.clone();
    let outcome = settle_within(timeout, move |done| {
        let _ = done.send(introspect_bytes(data.as_bytes()));
    });
    match outcome {
        Ok(Ok(info)) => Ok(info),
        Ok(Err(e)) => {
            log::debug!("Font introspection failed: {}", e);
            Err(e.into())
        }
        Err(SettleError::TimedOut) => {
            log::warn!("Font introspection gave up after {}ms", timeout.as_millis());
            Err(ProofsheetError::ParseTimeout {
                millis: timeout.as_millis() as u64,
            })
        }
        Err(SettleError::Died) => Err(ProofsheetError::ParseAborted),
    }
}

/// [`introspect_with_timeout`] for callers that only care whether a usable
/// result arrived in time.
pub fn parse_with_timeout(blob: &FontBlob, timeout: Duration) -> Option<FontInfo> {
    introspect_with_timeout(blob, timeout).ok()
}

/// A well-formed table directory with no tables at all, the smallest thing
/// the parser accepts.
#[cfg(test)]
pub(crate) fn empty_sfnt() -> Vec<u8> {
    let mut data = vec![0x00, 0x01, 0x00, 0x00];
    data.extend_from_slice(&[0u8; 8]);
    data
}
