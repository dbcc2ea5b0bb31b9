use serde::{Deserialize, Serialize};

/// Layout of each scalar when a vector or matrix is rendered as text.
///
/// Every value is written right-aligned into a field of at least `width`
/// characters with exactly `precision` digits after the decimal point.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    pub width: usize,
    pub precision: usize,
}

impl FormatConfig {
    pub fn new(width: usize, precision: usize) -> Self {
        Self { width, precision }
    }

    /// Write a single scalar padded with one space on each side.
    pub(crate) fn write_value<W: std::fmt::Write>(
        &self,
        out: &mut W,
        value: f64,
    ) -> std::fmt::Result {
        write!(
            out,
            " {:>width$.prec$} ",
            value,
            width = self.width,
            prec = self.precision
        )
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            width: 6,
            precision: 3,
        }
    }
}
