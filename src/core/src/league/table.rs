use crate::{MatchOutcome, Team, TeamId};
use serde::Serialize;
use std::cmp::Ordering;

/// Team ids in league table order. Valid only as a snapshot after a rebuild.
#[derive(Debug, Default, Clone)]
pub struct LeagueTable {
    rows: Vec<TeamId>,
}

impl LeagueTable {
    pub fn new(teams: &[Team]) -> Self {
        let mut table = LeagueTable::default();
        table.rebuild(teams);
        table
    }

    /// Clears the table and inserts every team at its sorted position.
    pub fn rebuild(&mut self, teams: &[Team]) {
        let mut ranked: Vec<&Team> = Vec::with_capacity(teams.len());

        for team in teams {
            let idx = ranked.partition_point(|other| other.ranking_cmp(team) == Ordering::Less);
            ranked.insert(idx, team);
        }

        self.rows = ranked.iter().map(|t| t.id).collect();
    }

    pub fn rows(&self) -> &[TeamId] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based table position.
    pub fn position(&self, team_id: TeamId) -> Option<usize> {
        self.rows.iter().position(|id| *id == team_id).map(|idx| idx + 1)
    }

    pub fn leaderboard(&self, teams: &[Team]) -> Vec<LeaderboardRow> {
        self.rows
            .iter()
            .filter_map(|id| teams.iter().find(|t| t.id == *id))
            .map(LeaderboardRow::from)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub name: String,
    pub games_played: i32,
    pub points: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub last_five_results: Vec<MatchOutcome>,
}

impl From<&Team> for LeaderboardRow {
    fn from(team: &Team) -> Self {
        let stats = &team.statistics;

        LeaderboardRow {
            name: team.name.clone(),
            games_played: stats.games_played,
            points: stats.points,
            wins: stats.wins,
            draws: stats.draws,
            losses: stats.losses,
            goals_for: stats.goals_for,
            goals_against: stats.goals_against,
            goal_difference: stats.goals_for - stats.goals_against,
            last_five_results: team.last_five_results().unwrap_or_default(),
        }
    }
}
