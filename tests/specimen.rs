//! End-to-end introspection against hand-assembled fonts.
//!
//! The fixtures are real sfnt binaries written table by table, just big
//! enough to carry a name table, fvar, cmap, maxp, post, and GSUB.

use proofsheet::{
    parse_with_timeout, FontBlob, FontFormat, FontSession, Tag, COMMON_FEATURE_TAGS, NOTDEF,
    PARSE_TIMEOUT,
};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn u16be(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn u32be(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

/// 16.16 fixed-point.
fn fixed(out: &mut Vec<u8>, v: f32) {
    u32be(out, ((v * 65536.0).round() as i32) as u32);
}

/// `name` table with one Windows/en-US record per (name id, value) pair.
fn name_table(records: &[(u16, &str)]) -> Vec<u8> {
    let mut table = Vec::new();
    let mut storage: Vec<u8> = Vec::new();
    u16be(&mut table, 0);
    u16be(&mut table, records.len() as u16);
    u16be(&mut table, 6 + 12 * records.len() as u16);
    for (id, value) in records {
        let encoded: Vec<u8> = value
            .encode_utf16()
            .flat_map(|unit| unit.to_be_bytes())
            .collect();
        u16be(&mut table, 3); // platform: Windows
        u16be(&mut table, 1); // encoding: Unicode BMP
        u16be(&mut table, 0x0409); // language: en-US
        u16be(&mut table, *id);
        u16be(&mut table, encoded.len() as u16);
        u16be(&mut table, storage.len() as u16);
        storage.extend_from_slice(&encoded);
    }
    table.extend_from_slice(&storage);
    table
}

/// `fvar` listing each axis as (tag, min, default, max, name id).
fn fvar_table(axes: &[([u8; 4], f32, f32, f32, u16)]) -> Vec<u8> {
    let mut table = Vec::new();
    u16be(&mut table, 1); // major version
    u16be(&mut table, 0); // minor version
    u16be(&mut table, 16); // offset to the axis array
    u16be(&mut table, 2); // reserved
    u16be(&mut table, axes.len() as u16);
    u16be(&mut table, 20); // axis record size
    u16be(&mut table, 0); // no named instances
    u16be(&mut table, 4 * axes.len() as u16 + 4);
    for (tag, min, default, max, name_id) in axes {
        table.extend_from_slice(tag);
        fixed(&mut table, *min);
        fixed(&mut table, *default);
        fixed(&mut table, *max);
        u16be(&mut table, 0); // flags
        u16be(&mut table, *name_id);
    }
    table
}

/// `cmap` with a single format 12 subtable, one group per mapping. Pass the
/// mappings sorted by codepoint.
fn cmap_table(mappings: &[(u32, u32)]) -> Vec<u8> {
    let mut table = Vec::new();
    u16be(&mut table, 0);
    u16be(&mut table, 1); // one encoding record
    u16be(&mut table, 3); // platform: Windows
    u16be(&mut table, 10); // encoding: full Unicode
    u32be(&mut table, 12); // subtable offset
    u16be(&mut table, 12); // format
    u16be(&mut table, 0); // reserved
    u32be(&mut table, 16 + 12 * mappings.len() as u32); // subtable length
    u32be(&mut table, 0); // language
    u32be(&mut table, mappings.len() as u32);
    for (codepoint, glyph) in mappings {
        u32be(&mut table, *codepoint);
        u32be(&mut table, *codepoint);
        u32be(&mut table, *glyph);
    }
    table
}

/// Version 0.5 `maxp`: nothing but the glyph count.
fn maxp_table(num_glyphs: u16) -> Vec<u8> {
    let mut table = Vec::new();
    u32be(&mut table, 0x00005000);
    u16be(&mut table, num_glyphs);
    table
}

/// Format 2 `post` naming every glyph with its own string.
fn post_table(names: &[&str]) -> Vec<u8> {
    let mut table = Vec::new();
    u32be(&mut table, 0x00020000); // version
    u32be(&mut table, 0); // italic angle
    u16be(&mut table, 0); // underline position
    u16be(&mut table, 0); // underline thickness
    u32be(&mut table, 0); // fixed pitch
    for _ in 0..4 {
        u32be(&mut table, 0); // memory usage hints
    }
    u16be(&mut table, names.len() as u16);
    for index in 0..names.len() {
        u16be(&mut table, 258 + index as u16);
    }
    for name in names {
        table.push(name.len() as u8);
        table.extend_from_slice(name.as_bytes());
    }
    table
}

/// GSUB whose single DFLT script reaches every listed feature, in list
/// order. The features carry no lookups; only the tags matter here.
fn gsub_table(features: &[[u8; 4]]) -> Vec<u8> {
    let indices: Vec<u16> = (0..features.len() as u16).collect();
    gsub_table_referencing(features, Some(&indices))
}

/// GSUB declaring `features` while the DFLT lang-sys references only
/// `indices`. `None` leaves the script list empty.
fn gsub_table_referencing(features: &[[u8; 4]], indices: Option<&[u16]>) -> Vec<u8> {
    let mut script_list = Vec::new();
    match indices {
        Some(indices) => {
            let mut lang_sys = Vec::new();
            u16be(&mut lang_sys, 0); // lookup order
            u16be(&mut lang_sys, 0xFFFF); // no required feature
            u16be(&mut lang_sys, indices.len() as u16);
            for index in indices {
                u16be(&mut lang_sys, *index);
            }

            let mut script = Vec::new();
            u16be(&mut script, 4); // default lang-sys right after this header
            u16be(&mut script, 0); // no tagged lang-sys records
            script.extend_from_slice(&lang_sys);

            u16be(&mut script_list, 1);
            script_list.extend_from_slice(b"DFLT");
            u16be(&mut script_list, 8);
            script_list.extend_from_slice(&script);
        }
        None => u16be(&mut script_list, 0),
    }

    let mut feature_list = Vec::new();
    u16be(&mut feature_list, features.len() as u16);
    let feature_array_base = 2 + 6 * features.len() as u16;
    for (index, tag) in features.iter().enumerate() {
        feature_list.extend_from_slice(tag);
        u16be(&mut feature_list, feature_array_base + 4 * index as u16);
    }
    for _ in features {
        u16be(&mut feature_list, 0); // feature params
        u16be(&mut feature_list, 0); // lookup count
    }

    let mut table = Vec::new();
    u16be(&mut table, 1); // major version
    u16be(&mut table, 0); // minor version
    let header_len = 10u16;
    u16be(&mut table, header_len);
    u16be(&mut table, header_len + script_list.len() as u16);
    u16be(
        &mut table,
        header_len + script_list.len() as u16 + feature_list.len() as u16,
    );
    table.extend_from_slice(&script_list);
    table.extend_from_slice(&feature_list);
    u16be(&mut table, 0); // empty lookup list
    table
}

/// Assemble tables into an sfnt binary: directory sorted by tag, table data
/// padded to four bytes.
fn assemble_font(mut tables: Vec<([u8; 4], Vec<u8>)>) -> Vec<u8> {
    tables.sort_by_key(|(tag, _)| *tag);
    let num = tables.len() as u16;
    let mut pow = 1u16;
    let mut log = 0u16;
    while pow * 2 <= num {
        pow *= 2;
        log += 1;
    }
    let mut font = Vec::new();
    u32be(&mut font, 0x00010000);
    u16be(&mut font, num);
    u16be(&mut font, pow * 16);
    u16be(&mut font, log);
    u16be(&mut font, (num - pow) * 16);

    let mut offset = 12 + 16 * tables.len() as u32;
    let mut body: Vec<u8> = Vec::new();
    for (tag, data) in &tables {
        font.extend_from_slice(tag);
        u32be(&mut font, 0); // checksum, never verified on read
        u32be(&mut font, offset);
        u32be(&mut font, data.len() as u32);
        body.extend_from_slice(data);
        let padded = (data.len() as u32 + 3) & !3;
        body.resize(body.len() + (padded - data.len() as u32) as usize, 0);
        offset += padded;
    }
    font.extend_from_slice(&body);
    font
}

fn specimen_tables() -> Vec<([u8; 4], Vec<u8>)> {
    vec![
        (*b"name", name_table(&[(1, "Specimen Sans"), (256, "Weight")])),
        (*b"fvar", fvar_table(&[(*b"wght", 100.0, 400.0, 900.0, 256)])),
        (
            *b"cmap",
            cmap_table(&[('A' as u32, 1), ('a' as u32, 2), ('b' as u32, 3)]),
        ),
        (*b"maxp", maxp_table(4)),
        (*b"post", post_table(&[".notdef", "A", "a", "b"])),
        (*b"GSUB", gsub_table(&[*b"kern", *b"liga", *b"smcp"])),
    ]
}

fn specimen_font() -> Vec<u8> {
    assemble_font(specimen_tables())
}

/// The specimen font with its GSUB swapped out.
fn font_with_gsub(gsub: Vec<u8>) -> Vec<u8> {
    let mut tables = specimen_tables();
    for (tag, data) in &mut tables {
        if *tag == *b"GSUB" {
            *data = gsub.clone();
        }
    }
    assemble_font(tables)
}

#[test]
fn test_introspects_a_hand_assembled_font() {
    let blob = FontBlob::new(specimen_font());
    let info = parse_with_timeout(&blob, PARSE_TIMEOUT).unwrap();

    assert_eq!(info.family_name, "Specimen Sans");
    assert_eq!(info.glyph_count, 4);

    assert_eq!(info.axes.len(), 1);
    let axis = &info.axes[0];
    assert_eq!(axis.tag, Tag::new(b"wght"));
    assert_eq!(axis.name, "Weight");
    assert_eq!(axis.min, 100.0);
    assert_eq!(axis.default, 400.0);
    assert_eq!(axis.max, 900.0);
    assert_eq!(axis.current, 400.0);

    assert_eq!(
        info.feature_tags,
        vec![Tag::new(b"kern"), Tag::new(b"liga"), Tag::new(b"smcp")]
    );
}

#[test]
fn test_glyph_table_pairs_names_with_codepoints() {
    let blob = FontBlob::new(specimen_font());
    let info = parse_with_timeout(&blob, Duration::from_secs(5)).unwrap();
    let glyphs = &info.glyphs;

    assert_eq!(glyphs.len(), 4);
    assert_eq!(glyphs[0].name, NOTDEF);
    assert_eq!(glyphs[0].codepoint, 0);

    let cap_a = glyphs.get("A").unwrap();
    assert_eq!(cap_a.index, 1);
    assert_eq!(cap_a.codepoint, 'A' as u32);
    assert_eq!(glyphs.get_by_codepoint('b' as u32).unwrap().name, "b");

    assert_eq!(glyphs.missing_chars("Ab z"), vec![' ', 'z']);
}

#[test]
fn test_session_offers_declared_features_and_axes() {
    let font = specimen_font();
    let size = font.len() as u64;
    let mut session = FontSession::new();
    session
        .load_bytes("Specimen-Sans.ttf", FontFormat::Ttf, font)
        .unwrap();

    let metadata = session.metadata().unwrap();
    assert_eq!(metadata.family_name, "Specimen Sans");
    assert_eq!(metadata.file_type, "TTF");
    assert_eq!(metadata.file_size, size);
    assert!(metadata.is_variable);

    // Only what the font declares, with the browser defaults switched on.
    let features = session.features().unwrap();
    assert_eq!(features.len(), 3);
    assert!(features.is_on(Tag::new(b"kern")));
    assert!(features.is_on(Tag::new(b"liga")));
    assert!(!features.is_on(Tag::new(b"smcp")));

    session.set_axis_value(Tag::new(b"wght"), 700.0);
    assert_eq!(session.variation_settings(), "\"wght\" 700");
    session.reset_axes();
    assert_eq!(session.variation_settings(), "\"wght\" 400");
}

#[test]
fn test_font_without_gsub_gets_common_features() {
    let tables: Vec<_> = specimen_tables()
        .into_iter()
        .filter(|(tag, _)| tag != b"GSUB")
        .collect();
    let mut session = FontSession::new();
    session
        .load_bytes("NoFeatures.ttf", FontFormat::Ttf, assemble_font(tables))
        .unwrap();

    let features = session.features().unwrap();
    assert_eq!(features.len(), COMMON_FEATURE_TAGS.len());
    assert!(features.is_on(Tag::new(b"liga")));
    assert!(!features.is_on(Tag::new(b"ss01")));
}

#[test]
fn test_unreferenced_feature_list_tags_are_kept() {
    // `smcp` sits in the feature list but no lang-sys points at it.
    let gsub = gsub_table_referencing(&[*b"liga", *b"smcp"], Some(&[0]));
    let blob = FontBlob::new(font_with_gsub(gsub));
    let info = parse_with_timeout(&blob, Duration::from_secs(5)).unwrap();

    assert_eq!(info.feature_tags, vec![Tag::new(b"liga"), Tag::new(b"smcp")]);
}

#[test]
fn test_scriptless_gsub_still_reports_declared_features() {
    let font = font_with_gsub(gsub_table_referencing(&[*b"smcp"], None));
    let blob = FontBlob::new(font.clone());
    let info = parse_with_timeout(&blob, Duration::from_secs(5)).unwrap();
    assert_eq!(info.feature_tags, vec![Tag::new(b"smcp")]);

    // A declared feature keeps the session off the common fallback list.
    let mut session = FontSession::new();
    session
        .load_bytes("Scriptless.ttf", FontFormat::Ttf, font)
        .unwrap();
    let features = session.features().unwrap();
    assert_eq!(features.len(), 1);
    assert!(!features.is_on(Tag::new(b"smcp")));
}

#[test]
fn test_unreadable_gsub_is_ignored() {
    let mut tables = specimen_tables();
    for (tag, data) in &mut tables {
        if *tag == *b"GSUB" {
            data.truncate(4);
        }
    }
    let blob = FontBlob::new(assemble_font(tables));
    let info = parse_with_timeout(&blob, Duration::from_secs(5)).unwrap();

    // The rest of the font still comes through.
    assert!(info.feature_tags.is_empty());
    assert_eq!(info.family_name, "Specimen Sans");
    assert_eq!(info.glyph_count, 4);
}

#[test]
fn test_load_file_reads_the_family_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("specimen.otf");
    std::fs::write(&path, specimen_font()).unwrap();

    let session = proofsheet::load(&path).unwrap();
    assert_eq!(session.metadata().unwrap().family_name, "Specimen Sans");
    assert_eq!(session.format(), Some(FontFormat::Otf));
}
