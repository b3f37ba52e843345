//! Integration level types

use std::fmt;

use crate::live_view::common::error::ViewerError;

/// Number of most recent frames averaged per output pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntegrationLevel {
    /// No integration, frames pass through untouched
    #[default]
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl IntegrationLevel {
    pub const ALL: [IntegrationLevel; 5] = [
        IntegrationLevel::X1,
        IntegrationLevel::X2,
        IntegrationLevel::X4,
        IntegrationLevel::X8,
        IntegrationLevel::X16,
    ];

    pub const fn frames(self) -> usize {
        match self {
            IntegrationLevel::X1 => 1,
            IntegrationLevel::X2 => 2,
            IntegrationLevel::X4 => 4,
            IntegrationLevel::X8 => 8,
            IntegrationLevel::X16 => 16,
        }
    }

    pub const fn is_bypass(self) -> bool {
        matches!(self, IntegrationLevel::X1)
    }

    /// Next higher level, saturating at X16.
    pub fn next(self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1).min(Self::ALL.len() - 1)]
    }

    /// Next lower level, saturating at X1.
    pub fn previous(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn index(self) -> usize {
        self.frames().trailing_zeros() as usize
    }
}

impl TryFrom<u32> for IntegrationLevel {
    type Error = ViewerError;

    fn try_from(frames: u32) -> Result<Self, Self::Error> {
        match frames {
            1 => Ok(IntegrationLevel::X1),
            2 => Ok(IntegrationLevel::X2),
            4 => Ok(IntegrationLevel::X4),
            8 => Ok(IntegrationLevel::X8),
            16 => Ok(IntegrationLevel::X16),
            other => Err(ViewerError::UnsupportedLevel(other)),
        }
    }
}

impl fmt::Display for IntegrationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.frames())
    }
}
