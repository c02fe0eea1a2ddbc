use serde::{Deserialize, Serialize};

/// Paper size for the print layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PageSize {
    #[default]
    A4,
    A3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    Portrait,
    /// Specimen pages read better wide, so landscape is the default.
    #[default]
    Landscape,
}

/// Margin per edge inside the printable sheet, in millimetres.
pub const PAGE_MARGIN_MM: f64 = 15.0;

impl PageSize {
    fn portrait_mm(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::A3 => (297.0, 420.0),
        }
    }
}

/// Sheet width and height in millimetres for the chosen orientation.
pub fn page_dimensions_mm(size: PageSize, orientation: PageOrientation) -> (f64, f64) {
    let (width, height) = size.portrait_mm();
    match orientation {
        PageOrientation::Portrait => (width, height),
        PageOrientation::Landscape => (height, width),
    }
}

/// The area left for specimen content after margins, in millimetres.
pub fn content_box_mm(size: PageSize, orientation: PageOrientation) -> (f64, f64) {
    let (width, height) = page_dimensions_mm(size, orientation);
    (width - 2.0 * PAGE_MARGIN_MM, height - 2.0 * PAGE_MARGIN_MM)
}

/// Value for a CSS `@page size` declaration, like `297mm 210mm`.
pub fn page_size_css(size: PageSize, orientation: PageOrientation) -> String {
    let (width, height) = page_dimensions_mm(size, orientation);
    format!("{}mm {}mm", width, height)
}
