use crate::TeamId;
use crate::league::{Game, Schedule, Week};
use itertools::Itertools;
use log::debug;
use std::collections::HashSet;

pub trait ScheduleGenerator {
    fn generate(&self, teams: &[TeamId]) -> Schedule;
}

/// Greedy round robin packing.
///
/// Every pairing `i < j` (in input order) is placed in a pool. Each pass over
/// the pool builds one week by taking, in order, each pairing whose teams are
/// both still free that week. Packing is deterministic but not guaranteed to
/// be minimal, so odd orderings may need more than `n - 1` weeks.
///
/// With `double` set the reversed fixtures follow as a second batch, week for
/// week, after all forward weeks.
#[derive(Debug, Copy, Clone)]
pub struct RoundRobinGenerator {
    pub double: bool,
}

impl Default for RoundRobinGenerator {
    fn default() -> Self {
        RoundRobinGenerator { double: true }
    }
}

impl RoundRobinGenerator {
    pub fn new(double: bool) -> Self {
        RoundRobinGenerator { double }
    }

    fn pack_weeks(mut pool: Vec<Game>) -> Vec<Week> {
        let mut weeks = Vec::new();

        while !pool.is_empty() {
            let mut used: HashSet<TeamId> = HashSet::new();
            let mut games = Vec::new();

            pool.retain(|game| {
                if used.contains(&game.home_team_id) || used.contains(&game.away_team_id) {
                    return true;
                }

                used.insert(game.home_team_id);
                used.insert(game.away_team_id);
                games.push(*game);

                false
            });

            weeks.push(Week::new(games));
        }

        weeks
    }
}

impl ScheduleGenerator for RoundRobinGenerator {
    fn generate(&self, teams: &[TeamId]) -> Schedule {
        let pool: Vec<Game> = teams
            .iter()
            .copied()
            .tuple_combinations()
            .map(|(home, away)| Game::new(home, away))
            .collect();

        let mut weeks = Self::pack_weeks(pool);

        if self.double {
            let mirrored: Vec<Week> = weeks.iter().map(Week::reversed).collect();
            weeks.extend(mirrored);
        }

        debug!("generated {} weeks for {} teams", weeks.len(), teams.len());

        Schedule::new(weeks)
    }
}
