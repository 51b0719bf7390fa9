use crate::error::{LeagueError, LeagueResult};
use crate::{Player, PlayerCollection, PointsSystem, ResultHistory, Team, TeamId, TeamStatistics};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<TeamId>,
    name: Option<String>,
    players: Option<Vec<Player>>,
    points_system: Option<PointsSystem>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: TeamId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    /// Overridden by `SeasonSettings::points` once the team joins a season.
    pub fn points_system(mut self, points_system: PointsSystem) -> Self {
        self.points_system = Some(points_system);
        self
    }

    pub fn build(self) -> LeagueResult<Team> {
        Ok(Team {
            id: self.id.ok_or_else(|| required("id"))?,
            name: self.name.ok_or_else(|| required("name"))?,
            statistics: TeamStatistics::new(),
            history: ResultHistory::new(),
            points_system: self.points_system.unwrap_or_default(),
            players: PlayerCollection::new(self.players.unwrap_or_default()),
        })
    }
}

fn required(field: &str) -> LeagueError {
    LeagueError::Builder(format!("{} is required", field))
}
