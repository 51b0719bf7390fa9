use crate::{MatchResult, ResultField, Team};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const MAX_GOALS: u8 = 5;
const MAX_DEFENSIVE_ACTIONS: u8 = 4;
const ASSIST_CHANCE: f32 = 0.7;

/// Produces a result for a game between two teams.
pub trait MatchSimulator {
    fn simulate(&mut self, home: &Team, away: &Team) -> MatchResult;
}

impl<F> MatchSimulator for F
where
    F: FnMut(&Team, &Team) -> MatchResult,
{
    fn simulate(&mut self, home: &Team, away: &Team) -> MatchResult {
        self(home, away)
    }
}

/// Uniform random scores with names drawn from the playing rosters.
pub struct RandomMatchSimulator {
    rng: StdRng,
}

impl Default for RandomMatchSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomMatchSimulator {
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomMatchSimulator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick_name<'p>(&mut self, names: &[&'p str]) -> Option<&'p str> {
        if names.is_empty() {
            return None;
        }

        Some(names[self.rng.random_range(0..names.len())])
    }

    fn fill_goals(&mut self, result: &mut MatchResult, goals: u8, roster: &[&str]) {
        for _ in 0..goals {
            let Some(scorer) = self.pick_name(roster) else {
                return;
            };

            result.goal_scorers.push(scorer.to_string());

            if self.rng.random::<f32>() < ASSIST_CHANCE {
                let teammates: Vec<&str> = roster.iter().copied().filter(|n| *n != scorer).collect();
                if let Some(assist) = self.pick_name(&teammates) {
                    result.goal_assists.push(assist.to_string());
                }
            }
        }
    }

    fn fill_defensive(&mut self, result: &mut MatchResult, field: ResultField, roster: &[&str]) {
        let count = self.rng.random_range(0..=MAX_DEFENSIVE_ACTIONS);

        for _ in 0..count {
            if let Some(name) = self.pick_name(roster) {
                result.names_mut(field).push(name.to_string());
            }
        }
    }
}

impl MatchSimulator for RandomMatchSimulator {
    fn simulate(&mut self, home: &Team, away: &Team) -> MatchResult {
        let home_roster: Vec<&str> = home.players.players.iter().map(|p| p.name()).collect();
        let away_roster: Vec<&str> = away.players.players.iter().map(|p| p.name()).collect();
        let everyone: Vec<&str> = home_roster.iter().chain(away_roster.iter()).copied().collect();

        let home_goals = self.rng.random_range(0..=MAX_GOALS);
        let away_goals = self.rng.random_range(0..=MAX_GOALS);

        let mut result = MatchResult::new(home_goals, away_goals);

        self.fill_goals(&mut result, home_goals, &home_roster);
        self.fill_goals(&mut result, away_goals, &away_roster);
        self.fill_defensive(&mut result, ResultField::Interceptions, &everyone);
        self.fill_defensive(&mut result, ResultField::Tackles, &everyone);

        result
    }
}
