use crate::TeamId;

/// Errors raised by league construction and schedule mutation.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LeagueError {
    /// Player is younger than the league minimum.
    #[error("player {name} is {age} years old, minimum age is {min}")]
    PlayerTooYoung { name: String, age: u8, min: u8 },

    /// Week number outside of the current schedule.
    #[error("week {week} is out of range, schedule has {weeks} weeks")]
    WeekOutOfRange { week: usize, weeks: usize },

    /// Two teams share an id within one season.
    #[error("team id {id} is used by more than one team")]
    DuplicateTeamId { id: TeamId },

    #[error("player {name} not found in team {team}")]
    PlayerNotFound { team: String, name: String },

    /// Required builder field was not provided.
    #[error("builder error: {0}")]
    Builder(String),
}

pub type LeagueResult<T> = Result<T, LeagueError>;
