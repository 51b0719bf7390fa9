use serde::Serialize;
use std::ops::Index;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TeamStatType {
    GamesPlayed,
    Wins,
    Draws,
    Losses,
    Points,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
}

/// Points awarded per result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PointsSystem {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
}

impl Default for PointsSystem {
    fn default() -> Self {
        PointsSystem {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStatistics {
    pub games_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub points: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
}

impl TeamStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cumulative total.
    ///
    /// Wins, draws and losses are diffed against the current total and the
    /// difference is carried into games played and points, so repeating a call
    /// with the same total changes nothing. Goal totals keep the goal
    /// difference in sync. Any other stat is assigned as is.
    pub fn set_cumulative(&mut self, stat: TeamStatType, value: i32, points: &PointsSystem) {
        match stat {
            TeamStatType::Wins => {
                let delta = value - self.wins;
                self.wins = value;
                self.games_played += delta;
                self.points += delta * points.win;
            }
            TeamStatType::Draws => {
                let delta = value - self.draws;
                self.draws = value;
                self.games_played += delta;
                self.points += delta * points.draw;
            }
            TeamStatType::Losses => {
                let delta = value - self.losses;
                self.losses = value;
                self.games_played += delta;
                self.points += delta * points.loss;
            }
            TeamStatType::GoalsFor => {
                self.goals_for = value;
                self.goal_difference = self.goals_for - self.goals_against;
            }
            TeamStatType::GoalsAgainst => {
                self.goals_against = value;
                self.goal_difference = self.goals_for - self.goals_against;
            }
            TeamStatType::GamesPlayed => self.games_played = value,
            TeamStatType::Points => self.points = value,
            TeamStatType::GoalDifference => self.goal_difference = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Index<TeamStatType> for TeamStatistics {
    type Output = i32;

    fn index(&self, stat: TeamStatType) -> &Self::Output {
        match stat {
            TeamStatType::GamesPlayed => &self.games_played,
            TeamStatType::Wins => &self.wins,
            TeamStatType::Draws => &self.draws,
            TeamStatType::Losses => &self.losses,
            TeamStatType::Points => &self.points,
            TeamStatType::GoalsFor => &self.goals_for,
            TeamStatType::GoalsAgainst => &self.goals_against,
            TeamStatType::GoalDifference => &self.goal_difference,
        }
    }
}
