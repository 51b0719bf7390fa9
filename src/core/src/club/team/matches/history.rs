use serde::Serialize;
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

pub const LAST_RESULTS_CAPACITY: usize = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_goals(scored: u8, conceded: u8) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "WIN",
            MatchOutcome::Draw => "DRAW",
            MatchOutcome::Loss => "LOSS",
        }
    }
}

impl Display for MatchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bounded window of the most recent results, oldest first.
#[derive(Debug, Clone)]
pub struct ResultHistory {
    items: VecDeque<MatchOutcome>,
}

impl Default for ResultHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultHistory {
    pub fn new() -> Self {
        ResultHistory {
            items: VecDeque::with_capacity(LAST_RESULTS_CAPACITY),
        }
    }

    pub fn add(&mut self, outcome: MatchOutcome) {
        if self.items.len() >= LAST_RESULTS_CAPACITY {
            self.items.pop_front();
        }

        self.items.push_back(outcome);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> impl Iterator<Item = &MatchOutcome> {
        self.items.iter()
    }
}
