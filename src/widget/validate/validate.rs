use std::fmt;

/// Smallest grid size accepted. 0 is a legal degenerate (empty) grid.
pub const MIN_GRID_SIZE: i64 = 0;
/// Largest grid size accepted.
pub const MAX_GRID_SIZE: i64 = 99;

/// Why a size input was rejected. Recovered locally: the grid is never
/// rebuilt with an invalid size, and the widget stays interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    Negative,
    TooLarge,
    NotANumber,
}

impl SizeError {
    /// User-facing message shown in the status area.
    pub fn message(&self) -> &'static str {
        match self {
            SizeError::Negative => "Value of the grid size cannot be negative",
            SizeError::TooLarge => "Value of the grid size cannot be larger than 99",
            SizeError::NotANumber => "Value of the grid size must be a number",
        }
    }
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SizeError {}

/// Parse raw control input into a grid size in [0, 99].
///
/// Unparseable text is rejected explicitly rather than falling through as a
/// malformed grid size.
pub fn validate_size(raw_input: &str) -> Result<u32, SizeError> {
    let parsed: i64 = raw_input
        .trim()
        .parse()
        .map_err(|_| SizeError::NotANumber)?;

    if parsed < MIN_GRID_SIZE {
        return Err(SizeError::Negative);
    }
    if parsed > MAX_GRID_SIZE {
        return Err(SizeError::TooLarge);
    }

    Ok(parsed as u32)
}
