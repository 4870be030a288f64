use super::constants::STEP_COUNT;

/// Which way a wheel gesture moves through the faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Only the sign of `delta_y` matters. Zero and NaN count as backward,
    /// the same way a missing delta would compare in the browser.
    #[inline]
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    #[inline]
    pub fn offset(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Index of the cube face currently requested by the viewer, always in
/// `0..STEP_COUNT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Step(u8);

impl Step {
    pub const COUNT: u8 = STEP_COUNT;

    /// Returns `None` when `index` does not name a face.
    #[cfg_attr(not(test), allow(dead_code))]
    #[inline]
    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Move one face in `direction`, wrapping around the cycle.
    #[inline]
    pub fn advance(self, direction: Direction) -> Self {
        let count = Self::COUNT as i32;
        let next = (self.0 as i32 + direction.offset() + count) % count;
        Self(next as u8)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
