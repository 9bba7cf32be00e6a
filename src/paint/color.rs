/// The color a paint operation produces for one cell.
///
/// Rendered to a CSS color string by the DOM layer; kept as data here so the
/// core stays headless and native-testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellPaint {
    /// Background / reset state.
    Clear,
    /// Opaque black (Default mode).
    Black,
    /// Black at the given alpha (Darken mode).
    BlackAlpha(f32),
    /// Fresh random color (Rgb mode).
    Rgb(u8, u8, u8),
}

impl CellPaint {
    pub fn to_css(&self) -> String {
        match self {
            CellPaint::Clear => "transparent".to_string(),
            CellPaint::Black => "black".to_string(),
            CellPaint::BlackAlpha(alpha) => format!("rgba(0, 0, 0, {})", alpha),
            CellPaint::Rgb(r, g, b) => format!("rgb({}, {}, {})", r, g, b),
        }
    }
}
