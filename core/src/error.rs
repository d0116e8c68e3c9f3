use core::fmt;
use thiserror::Error;

/// Which custom board setting failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigField {
    Height,
    Width,
    MineCount,
}

impl ConfigField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Width => "width",
            Self::MineCount => "number of bombs",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Bad input, the {field} must be between {min} and {max} (got {value})")]
    InvalidConfig {
        field: ConfigField,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Two mines on the same tile")]
    DuplicateMine,
    #[error("Mine layout has {actual} mines, board expects {expected}")]
    MineCountMismatch { expected: usize, actual: usize },
    #[error("Mines are already placed")]
    MinesAlreadyPlaced,
}

pub type Result<T> = core::result::Result<T, GameError>;
