//! Quarter-turn orientation of macro instances.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rotation of a macro instance in 90° steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Orientation {
    /// All orientations, in index order.
    pub const ALL: [Orientation; 4] = [
        Orientation::R0,
        Orientation::R90,
        Orientation::R180,
        Orientation::R270,
    ];

    /// Converts a FidoCAD orientation index.
    ///
    /// Negative values become `R0` and values above 3 become `R270`.
    pub fn from_index(index: i32) -> Self {
        match index {
            i32::MIN..=0 => Orientation::R0,
            1 => Orientation::R90,
            2 => Orientation::R180,
            _ => Orientation::R270,
        }
    }

    /// The FidoCAD orientation index, `0..=3`.
    pub fn index(self) -> i32 {
        match self {
            Orientation::R0 => 0,
            Orientation::R90 => 1,
            Orientation::R180 => 2,
            Orientation::R270 => 3,
        }
    }

    /// Adds the quarter turns of `other` to `self`, modulo a full turn.
    pub fn compose(self, other: Orientation) -> Self {
        Self::from_index((self.index() + other.index()) % 4)
    }

    /// Applies the rotation table to coordinates that are already scaled.
    ///
    /// `sx` is the local X coordinate times the X magnitude and `sy` the local
    /// Y coordinate times the Y magnitude. Mirroring only negates the X
    /// output; the Y output never depends on it.
    pub fn apply(self, mirror: bool, sx: f64, sy: f64) -> (f64, f64) {
        let (vx, vy) = match self {
            Orientation::R0 => (sx, sy),
            Orientation::R90 => (-sy, sx),
            Orientation::R180 => (-sx, -sy),
            Orientation::R270 => (sy, -sx),
        };
        if mirror {
            (-vx, vy)
        } else {
            (vx, vy)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
