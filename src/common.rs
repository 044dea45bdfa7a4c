//! Errors shared by the board types.

/// Errors returned by `Grid` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is outside `[0..BOARD_SIZE)`.
    IndexOutOfBounds { row: usize, col: usize },
    /// Raw cell value is neither water nor a ship segment.
    InvalidMarker(u8),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            BoardError::InvalidMarker(raw) => write!(f, "Invalid cell marker {}", raw),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
