//! The four wall directions and the per-cell wall set.
//!
//! In the circular projection TOP is the side nearer the centre and BOTTOM
//! the side nearer the rim. Row offsets are the same in both projections.

use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    /// Neighbour evaluation order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// (row delta, col delta)
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// Wall presence per direction, `true` = wall standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls([bool; 4]);

impl Walls {
    /// All four walls standing.
    pub const fn closed() -> Self {
        Self([true; 4])
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        !self.0[dir.index()]
    }

    pub fn clear(&mut self, dir: Direction) {
        self.0[dir.index()] = false;
    }

    pub fn open_count(&self) -> usize {
        self.0.iter().filter(|wall| !**wall).count()
    }

    pub fn as_array(&self) -> [bool; 4] {
        self.0
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::closed()
    }
}

impl Index<Direction> for Walls {
    type Output = bool;

    fn index(&self, dir: Direction) -> &bool {
        &self.0[dir.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_offsets_cancel_with_opposite() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_walls_start_closed() {
        let mut walls = Walls::default();
        assert_eq!(walls.open_count(), 0);
        assert_eq!(walls.as_array(), [true, true, true, true]);

        walls.clear(Direction::Left);
        assert!(walls.is_open(Direction::Left));
        assert!(!walls[Direction::Left]);
        assert!(walls[Direction::Top]);
        assert_eq!(walls.open_count(), 1);
    }
}
