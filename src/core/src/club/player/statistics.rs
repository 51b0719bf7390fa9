use serde::Serialize;
use std::ops::{Index, IndexMut};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerStatType {
    GamesPlayed,
    Goals,
    Assists,
    Interceptions,
    Tackles,
}

impl PlayerStatType {
    pub const ALL: [PlayerStatType; 5] = [
        PlayerStatType::GamesPlayed,
        PlayerStatType::Goals,
        PlayerStatType::Assists,
        PlayerStatType::Interceptions,
        PlayerStatType::Tackles,
    ];
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStatistics {
    pub games_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub interceptions: u32,
    pub tackles: u32,
}

impl PlayerStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, stat: PlayerStatType) {
        self[stat] += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Index<PlayerStatType> for PlayerStatistics {
    type Output = u32;

    fn index(&self, stat: PlayerStatType) -> &Self::Output {
        match stat {
            PlayerStatType::GamesPlayed => &self.games_played,
            PlayerStatType::Goals => &self.goals,
            PlayerStatType::Assists => &self.assists,
            PlayerStatType::Interceptions => &self.interceptions,
            PlayerStatType::Tackles => &self.tackles,
        }
    }
}

impl IndexMut<PlayerStatType> for PlayerStatistics {
    fn index_mut(&mut self, stat: PlayerStatType) -> &mut Self::Output {
        match stat {
            PlayerStatType::GamesPlayed => &mut self.games_played,
            PlayerStatType::Goals => &mut self.goals,
            PlayerStatType::Assists => &mut self.assists,
            PlayerStatType::Interceptions => &mut self.interceptions,
            PlayerStatType::Tackles => &mut self.tackles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_reads_matching_field() {
        let stats = PlayerStatistics {
            games_played: 1,
            goals: 2,
            assists: 3,
            interceptions: 4,
            tackles: 5,
        };

        assert_eq!(stats[PlayerStatType::GamesPlayed], 1);
        assert_eq!(stats[PlayerStatType::Goals], 2);
        assert_eq!(stats[PlayerStatType::Assists], 3);
        assert_eq!(stats[PlayerStatType::Interceptions], 4);
        assert_eq!(stats[PlayerStatType::Tackles], 5);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut stats = PlayerStatistics::new();
        for stat in PlayerStatType::ALL {
            stats.increment(stat);
        }

        stats.reset();

        assert_eq!(stats, PlayerStatistics::default());
    }
}
