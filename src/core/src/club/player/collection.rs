use crate::{Player, PlayerPositionType, PlayerStatType};
use std::cmp::Ordering;

#[derive(Debug, Default, Clone)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Removes the first player with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Player> {
        let index = self.players.iter().position(|p| p.name == name)?;
        Some(self.players.remove(index))
    }

    /// All players grouped by position, insertion order kept within a group.
    pub fn players(&self) -> Vec<&Player> {
        PlayerPositionType::ALL
            .iter()
            .flat_map(|position| self.by_position(*position))
            .collect()
    }

    pub fn by_position(&self, position: PlayerPositionType) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .collect()
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    pub fn top(&self, stat: PlayerStatType, count: usize) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();

        players.sort_by(|a, b| match b[stat].cmp(&a[stat]) {
            Ordering::Equal => a.name.cmp(&b.name),
            other => other,
        });

        players.truncate(count);
        players
    }
}
