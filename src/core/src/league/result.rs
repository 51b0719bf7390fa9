use crate::MatchResult;
use crate::league::Game;

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub game: Game,
    pub result: MatchResult,
}

#[derive(Debug, Clone)]
pub struct WeekResult {
    pub week: usize,
    pub games: Vec<GameRecord>,
}

impl WeekResult {
    pub fn new(week: usize) -> Self {
        WeekResult {
            week,
            games: Vec::new(),
        }
    }

    pub fn goals(&self) -> u32 {
        self.games
            .iter()
            .map(|g| g.result.home_goals as u32 + g.result.away_goals as u32)
            .sum()
    }
}

#[derive(Debug, Default, Clone)]
pub struct SeasonResult {
    pub weeks: Vec<WeekResult>,
}

impl SeasonResult {
    pub fn games_count(&self) -> usize {
        self.weeks.iter().map(|w| w.games.len()).sum()
    }

    pub fn goals(&self) -> u32 {
        self.weeks.iter().map(WeekResult::goals).sum()
    }
}
