use serde::{Deserialize, Serialize};

pub use command::*;
pub use engine::*;
pub use error::*;
pub use rules::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod command;
mod engine;
mod error;
mod rules;
mod snapshot;
mod tile;
mod types;

/// Preset difficulties.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Novice,
    Adept,
    Master,
    MasterFullscreen,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Novice,
        Level::Adept,
        Level::Master,
        Level::MasterFullscreen,
    ];

    /// `(height, width, mine_count)` for this preset.
    pub const fn params(self) -> (Coord, Coord, CellCount) {
        match self {
            // 12.3% bombs
            Self::Novice => (9, 9, 10),
            // 15.6% bombs
            Self::Adept => (14, 19, 42),
            // 20.65% bombs
            Self::Master => (14, 34, 98),
            // 21% bombs
            Self::MasterFullscreen => (14, 68, 200),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Adept => "Adept",
            Self::Master => "Master",
            Self::MasterFullscreen => "Fullscreen Master",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Preset(Level),
    Custom,
}

/// Inclusive bounds for custom boards, shared by the engine and any menu that prompts for them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLimits {
    pub min_height: Coord,
    pub max_height: Coord,
    pub min_width: Coord,
    pub max_width: Coord,
    pub min_mines: CellCount,
    /// Mine ceiling as a fraction `numerator / denominator` of the tile count.
    pub max_mine_ratio: (CellCount, CellCount),
}

impl BoardLimits {
    pub const STANDARD: BoardLimits = BoardLimits {
        min_height: 3,
        max_height: 14,
        min_width: 3,
        max_width: 68,
        min_mines: 1,
        max_mine_ratio: (3, 4),
    };

    /// Largest accepted mine count for a board of the given size.
    ///
    /// A zero denominator allows no mines at all.
    pub const fn max_mines(&self, height: usize, width: usize) -> usize {
        let (num, den) = self.max_mine_ratio;
        if den == 0 {
            return 0;
        }
        height * width * num as usize / den as usize
    }
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    height: Coord,
    width: Coord,
    mine_count: CellCount,
    level: Option<Level>,
}

impl BoardConfig {
    /// Builds a config without checking any limits.
    ///
    /// `mine_count` must stay below `height * width`.
    pub const fn new_unchecked(height: Coord, width: Coord, mine_count: CellCount) -> Self {
        debug_assert!(mine_count < mult(height, width));
        Self {
            height,
            width,
            mine_count,
            level: None,
        }
    }

    pub const fn from_preset(level: Level) -> Self {
        let (height, width, mine_count) = level.params();
        Self {
            height,
            width,
            mine_count,
            level: Some(level),
        }
    }

    pub fn from_custom(height: usize, width: usize, mine_count: usize) -> Result<Self> {
        Self::from_custom_with(&BoardLimits::STANDARD, height, width, mine_count)
    }

    pub fn from_custom_with(
        limits: &BoardLimits,
        height: usize,
        width: usize,
        mine_count: usize,
    ) -> Result<Self> {
        let height = check_range(
            ConfigField::Height,
            height,
            limits.min_height.into(),
            limits.max_height.into(),
        )?;
        let width = check_range(
            ConfigField::Width,
            width,
            limits.min_width.into(),
            limits.max_width.into(),
        )?;
        // never let the ceiling reach the full board, a board needs one safe tile
        let max_mines = limits
            .max_mines(height, width)
            .min((height * width).saturating_sub(1));
        let mine_count = check_range(
            ConfigField::MineCount,
            mine_count,
            limits.min_mines.into(),
            max_mines,
        )?;

        let to_coord = |value: usize| Coord::try_from(value).map_err(|_| GameError::InvalidCoords);
        let mine_count =
            CellCount::try_from(mine_count).map_err(|_| GameError::InvalidCoords)?;
        Ok(Self {
            height: to_coord(height)?,
            width: to_coord(width)?,
            mine_count,
            level: None,
        })
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    /// Interior `(height, width)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.height, self.width)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles() - self.mine_count
    }

    pub const fn level(&self) -> Option<Level> {
        self.level
    }

    pub const fn difficulty(&self) -> Difficulty {
        match self.level {
            Some(level) => Difficulty::Preset(level),
            None => Difficulty::Custom,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::from_preset(Level::Novice)
    }
}

fn check_range(field: ConfigField, value: usize, min: usize, max: usize) -> Result<usize> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(GameError::InvalidConfig {
            field,
            value,
            min,
            max,
        })
    }
}
