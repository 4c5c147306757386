use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Number of four-in-a-row windows credited to each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    pub red: u32,
    pub yellow: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    /// Credit one run to `player`.
    pub fn credit(&mut self, player: Player) {
        match player {
            Player::Red => self.red += 1,
            Player::Yellow => self.yellow += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.red + self.yellow
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

impl AddAssign for ScoreTally {
    fn add_assign(&mut self, rhs: Self) {
        self.red += rhs.red;
        self.yellow += rhs.yellow;
    }
}

impl Add for ScoreTally {
    type Output = ScoreTally;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}
