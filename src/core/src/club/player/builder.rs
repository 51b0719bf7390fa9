use crate::error::{LeagueError, LeagueResult};
use crate::{Player, PlayerPositionType};

#[derive(Default)]
pub struct PlayerBuilder {
    name: Option<String>,
    position: Option<PlayerPositionType>,
    age: Option<u8>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn build(self) -> LeagueResult<Player> {
        Player::new(
            self.name.ok_or_else(|| required("name"))?,
            self.position.ok_or_else(|| required("position"))?,
            self.age.ok_or_else(|| required("age"))?,
        )
    }
}

fn required(field: &str) -> LeagueError {
    LeagueError::Builder(format!("{} is required", field))
}
