use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    /// Roster listing order.
    pub const ALL: [PlayerPositionType; 4] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::Defender,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Forward,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::Defender => "DF",
            PlayerPositionType::Midfielder => "MF",
            PlayerPositionType::Forward => "FW",
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}
