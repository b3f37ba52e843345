//! View orientation types

/// Quarter-turn rotation of the displayed image, clockwise on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub const fn clockwise(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub const fn counterclockwise(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg90 => Rotation::Deg0,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg270 => Rotation::Deg180,
        }
    }

    /// Exact cosine and sine; avoids the rounding noise of `f64::sin_cos` at quarter turns.
    pub const fn cos_sin(self) -> (f64, f64) {
        match self {
            Rotation::Deg0 => (1.0, 0.0),
            Rotation::Deg90 => (0.0, 1.0),
            Rotation::Deg180 => (-1.0, 0.0),
            Rotation::Deg270 => (0.0, -1.0),
        }
    }

    /// Whether the image's width and height trade places on screen.
    pub const fn is_sideways(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}
