//! Fixed constants for both drills, plus the runtime step overrides.

pub const BOARD_SIZE: u8 = 10;
pub const SHIP_LENGTH: usize = 3;

/// Marker stored in a cell holding water.
pub const WATER: u8 = 0;
/// Marker stored in a cell holding a ship segment.
pub const SHIP: u8 = 3;

pub const ROOK_STEPS: u32 = 5;
pub const BISHOP_STEPS: u32 = 5;
pub const QUEEN_STEPS: u32 = 8;

/// Origin (row, col) of the horizontal ship, zero-indexed.
pub const HORIZONTAL_SHIP_ORIGIN: (usize, usize) = (2, 2);

/// Step counts used by one run of the movement drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillConfig {
    pub rook_steps: u32,
    pub bishop_steps: u32,
    pub queen_steps: u32,
}

impl DrillConfig {
    pub const fn new(rook_steps: u32, bishop_steps: u32, queen_steps: u32) -> Self {
        Self {
            rook_steps,
            bishop_steps,
            queen_steps,
        }
    }
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self::new(ROOK_STEPS, BISHOP_STEPS, QUEEN_STEPS)
    }
}
