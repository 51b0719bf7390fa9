use crate::TeamId;
use crate::error::{LeagueError, LeagueResult};
use std::vec::IntoIter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
}

impl Game {
    pub fn new(home_team_id: TeamId, away_team_id: TeamId) -> Self {
        Game {
            home_team_id,
            away_team_id,
        }
    }

    /// Same pairing with home and away swapped.
    pub fn reversed(&self) -> Self {
        Game::new(self.away_team_id, self.home_team_id)
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// One round of games. Its number is its position in the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub games: Vec<Game>,
    pub played: bool,
}

impl Week {
    pub fn new(games: Vec<Game>) -> Self {
        Week {
            games,
            played: false,
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn reversed(&self) -> Self {
        Week::new(self.games.iter().map(Game::reversed).collect())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Schedule {
    weeks: Vec<Week>,
}

impl Schedule {
    pub fn new(weeks: Vec<Week>) -> Self {
        Schedule { weeks }
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Week by 1-based number.
    pub fn week(&self, number: usize) -> Option<&Week> {
        number.checked_sub(1).and_then(|idx| self.weeks.get(idx))
    }

    /// Weeks paired with their current 1-based number.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Week)> {
        self.weeks.iter().enumerate().map(|(idx, week)| (idx + 1, week))
    }

    pub fn games_count(&self) -> usize {
        self.weeks.iter().map(|w| w.games.len()).sum()
    }

    /// First week in current order that has not been played yet.
    pub fn next_unplayed(&self) -> Option<(usize, &Week)> {
        self.iter().find(|(_, week)| !week.played)
    }

    pub(crate) fn mark_played(&mut self, number: usize) {
        if let Some(week) = number.checked_sub(1).and_then(|idx| self.weeks.get_mut(idx)) {
            week.played = true;
        }
    }

    /// Moves week `from` to the end, or to position `to`. Both are 1-based.
    pub fn move_week(&mut self, from: usize, to: Option<usize>) -> LeagueResult<()> {
        let from_idx = self.index_of(from)?;

        if let Some(to) = to {
            self.index_of(to)?;
        }

        let week = self.weeks.remove(from_idx);

        match to {
            Some(to) => self.weeks.insert(to - 1, week),
            None => self.weeks.push(week),
        }

        Ok(())
    }

    /// Snapshot of every game in the current week order.
    pub fn games(&self) -> GamesIter {
        let games: Vec<Game> = self
            .weeks
            .iter()
            .flat_map(|w| w.games.iter().copied())
            .collect();

        GamesIter {
            inner: games.into_iter(),
        }
    }

    fn index_of(&self, week: usize) -> LeagueResult<usize> {
        if week == 0 || week > self.weeks.len() {
            return Err(LeagueError::WeekOutOfRange {
                week,
                weeks: self.weeks.len(),
            });
        }

        Ok(week - 1)
    }
}

/// Finite, non-restartable sequence of scheduled games.
#[derive(Debug)]
pub struct GamesIter {
    inner: IntoIter<Game>,
}

impl Iterator for GamesIter {
    type Item = Game;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GamesIter {}
