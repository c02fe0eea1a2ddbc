//! Load a font and print what the proofing engine sees: metadata, axes,
//! features, the CSS it would emit, and the paginated specimen plan.
//!
//! ```sh
//! cargo run --example inspect -- path/to/font.ttf
//! ```

use proofsheet::{paginate, BlockCatalog, ProofsheetError, View};

fn main() -> Result<(), ProofsheetError> {
    env_logger::init();
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: inspect <font file>");
            std::process::exit(2);
        }
    };

    let session = proofsheet::load(&path)?;

    if let Some(metadata) = session.metadata() {
        println!("Family:   {}", metadata.family_name);
        println!("Format:   {}", metadata.file_type);
        println!("Size:     {} bytes", metadata.file_size);
        println!("Glyphs:   {}", metadata.glyph_count);
        println!("Variable: {}", if metadata.is_variable { "yes" } else { "no" });
    }

    if !session.axes().is_empty() {
        println!("\nAxes:");
        for axis in session.axes() {
            println!(
                "  {} {:24} {} .. {} (default {})",
                axis.tag, axis.name, axis.min, axis.max, axis.default
            );
        }
    }

    if let Some(features) = session.features() {
        let on: Vec<String> = features
            .iter()
            .filter(|(_, on)| *on)
            .map(|(tag, _)| tag.to_string())
            .collect();
        println!("\nFeatures: {} offered, on by default: {}", features.len(), on.join(" "));
    }

    println!("\nCSS:");
    println!("  font-variation-settings: {}", session.variation_settings());
    println!("  font-feature-settings:   {}", session.feature_settings());

    let catalog = BlockCatalog::default();
    let pages = paginate(&catalog.blocks_for_view(View::All));
    println!("\nSpecimen plan, {} pages:", pages.len());
    for (number, page) in pages.iter().enumerate() {
        let blocks: Vec<&str> = page.iter().map(|block| block.id()).collect();
        println!("  {:>2}. {}", number + 1, blocks.join(", "));
    }

    if let Some(glyphs) = session.glyphs() {
        let missing = glyphs.missing_chars(proofsheet::content::PANGRAMS[0]);
        if !missing.is_empty() {
            println!("\nMissing from \"{}\": {:?}", proofsheet::content::PANGRAMS[0], missing);
        }
    }

    Ok(())
}
