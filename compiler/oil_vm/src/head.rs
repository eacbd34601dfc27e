//! The read head: current address plus step direction.

/// Which way the head moves after each cell it consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Signed step: `+1` forward, `-1` backward.
    #[inline]
    pub fn delta(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[inline]
    #[must_use]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// `base + steps * delta`, wrapping on overflow.
    #[inline]
    pub fn offset(self, base: i64, steps: i64) -> i64 {
        base.wrapping_add(steps.wrapping_mul(self.delta()))
    }
}

/// Execution position of one interpreter instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Head {
    pub pointer: i64,
    pub direction: Direction,
}

impl Head {
    /// Head at address 0 moving forward.
    pub fn new() -> Self {
        Head::default()
    }

    /// Move one cell in the current direction.
    #[inline]
    pub fn advance(&mut self) {
        self.pointer = self.direction.offset(self.pointer, 1);
    }

    #[inline]
    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_follows_direction() {
        let mut head = Head::new();
        head.advance();
        head.advance();
        assert_eq!(head.pointer, 2);
        head.reverse();
        head.advance();
        assert_eq!(head.pointer, 1);
        assert_eq!(head.direction, Direction::Backward);
    }

    #[test]
    fn advance_can_go_negative() {
        let mut head = Head {
            pointer: 0,
            direction: Direction::Backward,
        };
        head.advance();
        assert_eq!(head.pointer, -1);
    }

    #[test]
    fn offset_scales_by_direction() {
        assert_eq!(Direction::Forward.offset(10, 3), 13);
        assert_eq!(Direction::Backward.offset(10, 3), 7);
    }

    #[test]
    fn offset_wraps_instead_of_panicking() {
        assert_eq!(Direction::Forward.offset(i64::MAX, 1), i64::MIN);
    }
}
