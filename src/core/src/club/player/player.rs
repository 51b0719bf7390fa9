use crate::club::player::builder::PlayerBuilder;
use crate::error::{LeagueError, LeagueResult};
use crate::{PlayerPositionType, PlayerStatType, PlayerStatistics};
use std::fmt::{Display, Formatter, Result};
use std::ops::Index;

pub const MIN_PLAYER_AGE: u8 = 18;

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub position: PlayerPositionType,
    pub age: u8,

    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn new(name: impl Into<String>, position: PlayerPositionType, age: u8) -> LeagueResult<Self> {
        let name = name.into();

        if age < MIN_PLAYER_AGE {
            return Err(LeagueError::PlayerTooYoung {
                name,
                age,
                min: MIN_PLAYER_AGE,
            });
        }

        Ok(Player {
            name,
            position,
            age,
            statistics: PlayerStatistics::new(),
        })
    }

    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> PlayerPositionType {
        self.position
    }

    pub fn reset_stats(&mut self) {
        self.statistics.reset();
    }
}

impl Index<PlayerStatType> for Player {
    type Output = u32;

    fn index(&self, stat: PlayerStatType) -> &Self::Output {
        &self.statistics[stat]
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.age)
    }
}
