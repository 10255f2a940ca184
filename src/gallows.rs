//! Failure-stage model for the hanged figure.
//!
//! The 3x3 stage grid is never stored anywhere. It is derived on demand from
//! the wrong-guess count, so the grid and the counter cannot drift apart.

/// Wrong guesses allowed before the game is lost. One per body part.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Side length of the stage grid.
pub const GRID_SIZE: usize = 3;

/// Snapshot of the stage grid: each cell is empty or holds one mark.
pub type StageGrid = [[Option<StageMark>; GRID_SIZE]; GRID_SIZE];

/// One body part of the hanged figure, revealed by a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageMark {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl StageMark {
    /// The mark revealed by the n-th wrong guess.
    ///
    /// # Panics
    /// Panics if `n` is outside `1..=6`. The engine keeps the count in range,
    /// so reaching this is an internal bug, not a game event.
    pub fn for_wrong_guess(n: u8) -> Self {
        match n {
            1 => Self::Head,
            2 => Self::Torso,
            3 => Self::LeftArm,
            4 => Self::RightArm,
            5 => Self::LeftLeg,
            6 => Self::RightLeg,
            _ => panic!("wrong guess count must be between 1 and 6, got {n}"),
        }
    }

    /// The fixed (row, column) cell this mark occupies.
    pub fn cell(self) -> (usize, usize) {
        match self {
            Self::Head => (0, 1),
            Self::Torso => (1, 1),
            Self::LeftArm => (1, 0),
            Self::RightArm => (1, 2),
            Self::LeftLeg => (2, 0),
            Self::RightLeg => (2, 2),
        }
    }

    /// Character used when printing the grid.
    pub fn glyph(self) -> char {
        match self {
            Self::Head => 'O',
            Self::Torso => '|',
            Self::LeftArm | Self::LeftLeg => '/',
            Self::RightArm | Self::RightLeg => '\\',
        }
    }
}

/// Derive the stage grid for a wrong-guess count in `0..=6`.
///
/// Cumulative: each wrong guess adds one mark and never removes one, so
/// `grid(n)` contains exactly `n` occupied cells.
pub fn grid(wrong_guess_count: u8) -> StageGrid {
    let mut grid: StageGrid = [[None; GRID_SIZE]; GRID_SIZE];
    for n in 1..=wrong_guess_count {
        let mark = StageMark::for_wrong_guess(n);
        let (row, col) = mark.cell();
        grid[row][col] = Some(mark);
    }
    grid
}
