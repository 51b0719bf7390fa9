use crate::club::team::builder::TeamBuilder;
use crate::error::{LeagueError, LeagueResult};
use crate::{
    MatchOutcome, Player, PlayerCollection, PlayerPositionType, PlayerStatType, PointsSystem,
    ResultHistory, TeamStatType, TeamStatistics,
};
use log::debug;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};
use std::ops::Index;

pub type TeamId = u32;

#[derive(Debug, Clone)]
pub struct Team {
    pub id: TeamId,
    pub name: String,

    pub statistics: TeamStatistics,
    pub history: ResultHistory,
    pub points_system: PointsSystem,

    pub players: PlayerCollection,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, players: Vec<Player>) -> Self {
        Team {
            id,
            name: name.into(),
            statistics: TeamStatistics::new(),
            history: ResultHistory::new(),
            points_system: PointsSystem::default(),
            players: PlayerCollection::new(players),
        }
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Sets a cumulative statistic without touching the result history.
    pub fn set_stat(&mut self, stat: TeamStatType, value: i32) {
        self.statistics.set_cumulative(stat, value, &self.points_system);
    }

    /// Records one played game: bumps the matching total and appends to history.
    pub fn record_result(&mut self, outcome: MatchOutcome) {
        let stat = match outcome {
            MatchOutcome::Win => TeamStatType::Wins,
            MatchOutcome::Draw => TeamStatType::Draws,
            MatchOutcome::Loss => TeamStatType::Losses,
        };

        self.set_stat(stat, self.statistics[stat] + 1);
        self.history.add(outcome);

        debug!("team {} recorded {}", self.name, outcome);
    }

    pub fn add_goals(&mut self, scored: u8, conceded: u8) {
        self.set_stat(TeamStatType::GoalsFor, self.statistics.goals_for + scored as i32);
        self.set_stat(
            TeamStatType::GoalsAgainst,
            self.statistics.goals_against + conceded as i32,
        );
    }

    /// Last results, oldest first; `None` until a result is recorded.
    pub fn last_five_results(&self) -> Option<Vec<MatchOutcome>> {
        if self.history.is_empty() {
            return None;
        }

        Some(self.history.items().copied().collect())
    }

    pub fn reset_stats(&mut self) {
        self.statistics.reset();
        self.history.clear();
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.add(player);
    }

    pub fn remove_player(&mut self, name: &str) -> LeagueResult<Player> {
        self.players
            .remove(name)
            .ok_or_else(|| LeagueError::PlayerNotFound {
                team: self.name.clone(),
                name: name.to_string(),
            })
    }

    /// Players of one position, or the whole squad grouped by position.
    pub fn players(&self, position: Option<PlayerPositionType>) -> Option<Vec<&Player>> {
        let players = match position {
            Some(position) => self.players.by_position(position),
            None => self.players.players(),
        };

        if players.is_empty() {
            return None;
        }

        Some(players)
    }

    pub fn top_players(&self, stat: PlayerStatType, count: usize) -> Vec<&Player> {
        self.players.top(stat, count)
    }

    /// League table order: points, goal difference and goals scored descending,
    /// then name ascending. Id settles teams sharing a name.
    pub fn ranking_cmp(&self, other: &Team) -> Ordering {
        let (a, b) = (&self.statistics, &other.statistics);

        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl Index<TeamStatType> for Team {
    type Output = i32;

    fn index(&self, stat: TeamStatType) -> &Self::Output {
        &self.statistics[stat]
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Team: {}", self.name)
    }
}
