use crate::{MatchOutcome, PlayerStatType};
use serde::Serialize;

/// Name lists carried by a match result, each feeding one player stat.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ResultField {
    GoalScorers,
    GoalAssists,
    Interceptions,
    Tackles,
}

impl ResultField {
    pub const ALL: [ResultField; 4] = [
        ResultField::GoalScorers,
        ResultField::GoalAssists,
        ResultField::Interceptions,
        ResultField::Tackles,
    ];

    pub fn player_stat(&self) -> PlayerStatType {
        match self {
            ResultField::GoalScorers => PlayerStatType::Goals,
            ResultField::GoalAssists => PlayerStatType::Assists,
            ResultField::Interceptions => PlayerStatType::Interceptions,
            ResultField::Tackles => PlayerStatType::Tackles,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub home_goals: u8,
    pub away_goals: u8,
    pub goal_scorers: Vec<String>,
    pub goal_assists: Vec<String>,
    pub interceptions: Vec<String>,
    pub tackles: Vec<String>,
}

impl MatchResult {
    pub fn new(home_goals: u8, away_goals: u8) -> Self {
        MatchResult {
            home_goals,
            away_goals,
            ..Default::default()
        }
    }

    pub fn names(&self, field: ResultField) -> &[String] {
        match field {
            ResultField::GoalScorers => &self.goal_scorers,
            ResultField::GoalAssists => &self.goal_assists,
            ResultField::Interceptions => &self.interceptions,
            ResultField::Tackles => &self.tackles,
        }
    }

    pub fn names_mut(&mut self, field: ResultField) -> &mut Vec<String> {
        match field {
            ResultField::GoalScorers => &mut self.goal_scorers,
            ResultField::GoalAssists => &mut self.goal_assists,
            ResultField::Interceptions => &mut self.interceptions,
            ResultField::Tackles => &mut self.tackles,
        }
    }

    pub fn home_outcome(&self) -> MatchOutcome {
        MatchOutcome::from_goals(self.home_goals, self.away_goals)
    }

    pub fn away_outcome(&self) -> MatchOutcome {
        MatchOutcome::from_goals(self.away_goals, self.home_goals)
    }
}
