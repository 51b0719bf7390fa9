use crate::error::{LeagueError, LeagueResult};
use crate::league::{
    Game, GameRecord, GamesIter, LeaderboardRow, LeagueTable, RoundRobinGenerator, Schedule,
    ScheduleGenerator, SeasonResult, WeekResult,
};
use crate::utils::Logging;
use crate::{
    MatchResult, MatchSimulator, Player, PlayerStatType, PointsSystem, ResultField, Team, TeamId,
    TeamIdSequence,
};
use itertools::Itertools;
use log::{debug, info, warn};

#[derive(Debug, Copy, Clone)]
pub struct SeasonSettings {
    pub points: PointsSystem,
    pub double_round_robin: bool,
}

impl Default for SeasonSettings {
    fn default() -> Self {
        SeasonSettings {
            points: PointsSystem::default(),
            double_round_robin: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeasonState {
    /// No week played yet.
    Scheduled,
    /// Season in progress, holding the number of the last week played.
    Simulating(usize),
    Completed,
}

#[derive(Debug)]
pub struct Season {
    teams: Vec<Team>,
    schedule: Schedule,
    table: LeagueTable,
    settings: SeasonSettings,
    state: SeasonState,
}

impl Season {
    /// Builds a season and its round robin schedule.
    ///
    /// Team ids must be unique. `settings.points` replaces the points system
    /// of every team, including one set through `TeamBuilder::points_system`.
    pub fn new(teams: Vec<Team>, settings: SeasonSettings) -> LeagueResult<Self> {
        let generator = RoundRobinGenerator::new(settings.double_round_robin);
        Self::with_generator(teams, settings, &generator)
    }

    pub fn with_generator<G: ScheduleGenerator + ?Sized>(
        mut teams: Vec<Team>,
        settings: SeasonSettings,
        generator: &G,
    ) -> LeagueResult<Self> {
        if let Some(id) = teams.iter().map(|t| t.id).duplicates().next() {
            return Err(LeagueError::DuplicateTeamId { id });
        }

        for team in teams.iter_mut() {
            team.points_system = settings.points;
        }

        let team_ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
        let schedule = generator.generate(&team_ids);

        if teams.len() < 2 {
            warn!("season with {} teams has no games", teams.len());
        }

        info!(
            "season created: {} teams, {} weeks, {} games",
            teams.len(),
            schedule.len(),
            schedule.games_count()
        );

        Ok(Season {
            table: LeagueTable::new(&teams),
            teams,
            schedule,
            settings,
            state: SeasonState::Scheduled,
        })
    }

    pub fn builder() -> SeasonBuilder {
        SeasonBuilder::new()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn table(&self) -> &LeagueTable {
        &self.table
    }

    pub fn settings(&self) -> &SeasonSettings {
        &self.settings
    }

    pub fn state(&self) -> SeasonState {
        self.state
    }

    /// Plays the next unplayed week and refreshes the table.
    pub fn simulate_week<S: MatchSimulator + ?Sized>(&mut self, simulator: &mut S) -> Option<WeekResult> {
        let Some((number, week)) = self.schedule.next_unplayed() else {
            self.state = SeasonState::Completed;
            return None;
        };

        let games = week.games.clone();

        let mut week_result = WeekResult::new(number);

        for game in games {
            if let Some(result) = self.play_game(&game, simulator) {
                week_result.games.push(GameRecord { game, result });
            }
        }

        self.schedule.mark_played(number);
        self.table.rebuild(&self.teams);

        self.state = match self.schedule.next_unplayed() {
            Some(_) => SeasonState::Simulating(number),
            None => SeasonState::Completed,
        };

        info!(
            "week {} played: {} games, {} goals",
            number,
            week_result.games.len(),
            week_result.goals()
        );

        Some(week_result)
    }

    /// Plays every remaining week in current schedule order.
    pub fn simulate_season<S: MatchSimulator + ?Sized>(&mut self, simulator: &mut S) -> SeasonResult {
        let mut result = SeasonResult::default();

        loop {
            let message = format!("simulate week: {}", result.weeks.len() + 1);

            match Logging::estimate_result(|| self.simulate_week(simulator), &message) {
                Some(week) => result.weeks.push(week),
                None => break,
            }
        }

        if let Some(leader) = self.table.rows().first().and_then(|id| self.team(*id)) {
            info!("season completed, leader: {} ({} pts)", leader.name, leader.statistics.points);
        }

        result
    }

    /// Moves week `from` to the end of the schedule, or to position `to`.
    /// Numbers are 1-based. Recorded statistics are untouched.
    pub fn move_week(&mut self, from: usize, to: Option<usize>) -> LeagueResult<()> {
        self.schedule.move_week(from, to)?;

        debug!("week {} moved to {:?}", from, to.unwrap_or(self.schedule.len()));

        Ok(())
    }

    /// Snapshot of every game in the current schedule order.
    pub fn games(&self) -> GamesIter {
        self.schedule.games()
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardRow> {
        self.table.leaderboard(&self.teams)
    }

    fn play_game<S: MatchSimulator + ?Sized>(&mut self, game: &Game, simulator: &mut S) -> Option<MatchResult> {
        let home_idx = self.team_index(game.home_team_id)?;
        let away_idx = self.team_index(game.away_team_id)?;

        if home_idx == away_idx {
            warn!("skipping game of team {} against itself", game.home_team_id);
            return None;
        }

        let result = simulator.simulate(&self.teams[home_idx], &self.teams[away_idx]);
        let (home, away) = pair_mut(&mut self.teams, home_idx, away_idx);

        debug!(
            "play game: {} {} - {} {}",
            home.name, result.home_goals, result.away_goals, away.name
        );

        home.add_goals(result.home_goals, result.away_goals);
        away.add_goals(result.away_goals, result.home_goals);

        Self::update_player_stats(home, away, &result);

        home.record_result(result.home_outcome());
        away.record_result(result.away_outcome());

        Some(result)
    }

    fn update_player_stats(home: &mut Team, away: &mut Team, result: &MatchResult) {
        for player in home.players.iter_mut().chain(away.players.iter_mut()) {
            player.statistics.increment(PlayerStatType::GamesPlayed);
        }

        for field in ResultField::ALL {
            let stat = field.player_stat();

            for name in result.names(field) {
                match home.players.find_mut(name) {
                    Some(player) => player.statistics.increment(stat),
                    None => match away.players.find_mut(name) {
                        Some(player) => player.statistics.increment(stat),
                        None => debug!("no player named {} in {} or {}", name, home.name, away.name),
                    },
                }
            }
        }
    }

    fn team_index(&self, id: TeamId) -> Option<usize> {
        let idx = self.teams.iter().position(|t| t.id == id);

        if idx.is_none() {
            warn!("scheduled team {} is not part of the season", id);
        }

        idx
    }
}

fn pair_mut(teams: &mut [Team], first: usize, second: usize) -> (&mut Team, &mut Team) {
    if first < second {
        let (left, right) = teams.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = teams.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}

/// Collects teams for a season and numbers them.
#[derive(Default)]
pub struct SeasonBuilder {
    sequence: TeamIdSequence,
    teams: Vec<Team>,
    settings: SeasonSettings,
}

impl SeasonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: SeasonSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn team(mut self, name: impl Into<String>, players: Vec<Player>) -> Self {
        let id = self.sequence.next_id();
        self.teams.push(Team::new(id, name, players));
        self
    }

    pub fn build(self) -> LeagueResult<Season> {
        Season::new(self.teams, self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        LAST_RESULTS_CAPACITY, LeagueError, MatchOutcome, PlayerPositionType,
        RandomMatchSimulator, TeamStatType,
    };

    fn squad(prefix: &str) -> Vec<Player> {
        vec![
            Player::new(format!("{} Keeper", prefix), PlayerPositionType::Goalkeeper, 30).unwrap(),
            Player::new(format!("{} Striker", prefix), PlayerPositionType::Forward, 22).unwrap(),
        ]
    }

    fn season(names: &[&str]) -> Season {
        names
            .iter()
            .fold(Season::builder(), |builder, name| builder.team(*name, squad(name)))
            .build()
            .unwrap()
    }

    /// Lower id wins 2-0, both goals by its striker.
    fn lower_id_wins(home: &Team, away: &Team) -> MatchResult {
        let winner = if home.id < away.id { home } else { away };
        let mut result = if home.id < away.id {
            MatchResult::new(2, 0)
        } else {
            MatchResult::new(0, 2)
        };

        let striker = format!("{} Striker", winner.name);
        result.goal_scorers = vec![striker.clone(), striker];
        result.goal_assists = vec![format!("{} Keeper", winner.name)];
        result.tackles = vec![String::from("Nobody")];
        result
    }

    #[test]
    fn builder_assigns_sequential_ids() {
        let season = season(&["A", "B", "C"]);

        let ids: Vec<TeamId> = season.teams().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn full_season_updates_standings() {
        let mut season = season(&["A", "B", "C", "D"]);
        assert_eq!(season.schedule().len(), 6);

        let result = season.simulate_season(&mut lower_id_wins);

        assert_eq!(result.weeks.len(), 6);
        assert_eq!(result.games_count(), 12);
        assert_eq!(season.state(), SeasonState::Completed);

        let rows = season.leaderboard();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);

        let points: Vec<i32> = rows.iter().map(|r| r.points).collect();
        assert_eq!(points, vec![18, 12, 6, 0]);

        for row in &rows {
            assert_eq!(row.games_played, 6);
            assert_eq!(row.last_five_results.len(), LAST_RESULTS_CAPACITY);
            assert_eq!(row.goal_difference, row.goals_for - row.goals_against);
        }

        assert!(rows[3].last_five_results.iter().all(|r| *r == MatchOutcome::Loss));
    }

    #[test]
    fn player_stats_follow_result_names() {
        let mut season = season(&["A", "B", "C", "D"]);

        season.simulate_season(&mut lower_id_wins);

        let a = season.team(1).unwrap();
        let striker = a.players.players.iter().find(|p| p.name == "A Striker").unwrap();
        let keeper = a.players.players.iter().find(|p| p.name == "A Keeper").unwrap();

        assert_eq!(striker[PlayerStatType::GamesPlayed], 6);
        assert_eq!(striker[PlayerStatType::Goals], 12);
        assert_eq!(keeper[PlayerStatType::Assists], 6);
        assert_eq!(keeper[PlayerStatType::Tackles], 0);

        let d = season.team(4).unwrap();
        assert!(d.players.players.iter().all(|p| p[PlayerStatType::Goals] == 0));
    }

    #[test]
    fn draws_rank_by_name() {
        let mut season = season(&["Delta", "Bravo", "Charlie", "Alpha"]);
        let mut always_draw = |_: &Team, _: &Team| MatchResult::new(1, 1);

        season.simulate_season(&mut always_draw);

        let rows = season.leaderboard();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie", "Delta"]);
        assert!(rows.iter().all(|r| r.points == 6 && r.draws == 6));
    }

    #[test]
    fn table_is_rebuilt_after_each_week() {
        let mut season = season(&["A", "B", "C", "D"]);
        let mut away_wins = |_: &Team, _: &Team| MatchResult::new(0, 1);

        let week = season.simulate_week(&mut away_wins).unwrap();

        assert_eq!(week.week, 1);
        assert_eq!(season.state(), SeasonState::Simulating(1));
        // week 1 is A-B and C-D, away sides win
        assert_eq!(season.table().rows(), &[2, 4, 1, 3]);
    }

    #[test]
    fn simulate_week_after_completion_returns_none() {
        let mut season = season(&["A", "B"]);
        let mut sim = RandomMatchSimulator::with_seed(3);

        assert!(season.simulate_week(&mut sim).is_some());
        assert!(season.simulate_week(&mut sim).is_some());
        assert!(season.simulate_week(&mut sim).is_none());
        assert_eq!(season.state(), SeasonState::Completed);
    }

    #[test]
    fn empty_and_single_team_seasons() {
        let mut empty = Season::builder().build().unwrap();
        assert!(empty.schedule().is_empty());
        assert_eq!(empty.simulate_season(&mut lower_id_wins).weeks.len(), 0);
        assert!(empty.leaderboard().is_empty());

        let mut single = season(&["Solo"]);
        single.simulate_season(&mut lower_id_wins);

        let rows = single.leaderboard();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].games_played, 0);
        assert!(rows[0].last_five_results.is_empty());
        assert!(single.team(1).unwrap().last_five_results().is_none());
    }

    #[test]
    fn move_week_changes_play_order_only() {
        let mut season = season(&["A", "B", "C", "D"]);
        let first_week = season.schedule().week(1).unwrap().games.clone();

        season.move_week(1, None).unwrap();

        assert_eq!(&season.schedule().week(6).unwrap().games, &first_week);
        assert!(season.teams().iter().all(|t| t[TeamStatType::GamesPlayed] == 0));

        let games: Vec<Game> = season.games().collect();
        assert_eq!(games.len(), 12);
        assert_eq!(&games[10..], first_week.as_slice());
    }

    #[test]
    fn move_week_round_trip() {
        let mut season = season(&["A", "B", "C", "D"]);
        let original = season.schedule().clone();

        season.move_week(3, None).unwrap();
        season.move_week(6, Some(3)).unwrap();

        assert_eq!(season.schedule(), &original);
    }

    #[test]
    fn move_week_out_of_range() {
        let mut season = season(&["A", "B", "C", "D"]);

        assert_eq!(
            season.move_week(7, None),
            Err(LeagueError::WeekOutOfRange { week: 7, weeks: 6 })
        );
        assert_eq!(
            season.move_week(1, Some(0)),
            Err(LeagueError::WeekOutOfRange { week: 0, weeks: 6 })
        );
    }

    #[test]
    fn played_weeks_are_not_replayed_after_move() {
        let mut season = season(&["A", "B", "C", "D"]);
        let mut sim = RandomMatchSimulator::with_seed(11);

        season.simulate_week(&mut sim);

        season.move_week(1, None).unwrap();
        let result = season.simulate_season(&mut sim);

        assert_eq!(result.weeks.len(), 5);
        assert!(result.weeks.iter().all(|w| w.week <= 5));
        assert!(season.teams().iter().all(|t| t[TeamStatType::GamesPlayed] == 6));
    }

    #[test]
    fn random_season_keeps_invariants() {
        let mut season = season(&["A", "B", "C", "D", "E", "F"]);
        let mut sim = RandomMatchSimulator::with_seed(2024);

        season.simulate_season(&mut sim);

        for team in season.teams() {
            let stats = &team.statistics;

            assert_eq!(stats.points, 3 * stats.wins + stats.draws);
            assert_eq!(stats.games_played, stats.wins + stats.draws + stats.losses);
            assert_eq!(stats.games_played, 10);
            assert_eq!(stats.goal_difference, stats.goals_for - stats.goals_against);
            assert_eq!(
                team.history.len(),
                (stats.games_played as usize).min(LAST_RESULTS_CAPACITY)
            );
        }

        let goals_for: i32 = season.teams().iter().map(|t| t.statistics.goals_for).sum();
        let goals_against: i32 = season.teams().iter().map(|t| t.statistics.goals_against).sum();
        assert_eq!(goals_for, goals_against);
    }

    #[test]
    fn custom_points_reach_every_team() {
        let settings = SeasonSettings {
            points: PointsSystem {
                win: 2,
                draw: 1,
                loss: 0,
            },
            double_round_robin: false,
        };
        let mut season = Season::builder()
            .settings(settings)
            .team("A", squad("A"))
            .team("B", squad("B"))
            .build()
            .unwrap();

        season.simulate_season(&mut lower_id_wins);

        assert_eq!(season.schedule().len(), 1);
        assert_eq!(season.team(1).unwrap().statistics.points, 2);
    }

    #[test]
    fn state_tracks_last_played_week() {
        let mut season = season(&["A", "B", "C"]);
        assert_eq!(season.state(), SeasonState::Scheduled);

        season.simulate_week(&mut lower_id_wins);
        season.simulate_week(&mut lower_id_wins);
        assert_eq!(season.state(), SeasonState::Simulating(2));

        season.move_week(1, None).unwrap();
        season.simulate_week(&mut lower_id_wins);
        assert_eq!(season.state(), SeasonState::Simulating(2));
    }

    #[test]
    fn duplicate_team_ids_are_rejected() {
        let teams = vec![
            Team::new(1, "A", squad("A")),
            Team::new(1, "B", squad("B")),
            Team::new(2, "C", squad("C")),
        ];

        let result = Season::new(teams, SeasonSettings::default());

        assert_eq!(result.err(), Some(LeagueError::DuplicateTeamId { id: 1 }));
    }

    #[test]
    fn unique_team_ids_play_every_game() {
        let teams = vec![
            Team::new(5, "A", squad("A")),
            Team::new(1, "B", squad("B")),
            Team::new(3, "C", squad("C")),
        ];
        let mut season = Season::new(teams, SeasonSettings::default()).unwrap();

        let result = season.simulate_season(&mut lower_id_wins);

        assert_eq!(result.games_count(), season.schedule().games_count());
        assert!(season.teams().iter().all(|t| t[TeamStatType::GamesPlayed] == 4));
    }

    #[test]
    fn shared_player_name_credits_home_side() {
        let shared = |position| Player::new("X", position, 25).unwrap();
        let mut season = Season::builder()
            .team("A", vec![shared(PlayerPositionType::Forward)])
            .team("B", vec![shared(PlayerPositionType::Defender)])
            .settings(SeasonSettings {
                double_round_robin: false,
                ..SeasonSettings::default()
            })
            .build()
            .unwrap();
        let mut home_scores = |_: &Team, _: &Team| {
            let mut result = MatchResult::new(1, 0);
            result.goal_scorers = vec![String::from("X")];
            result.tackles = vec![String::from("X")];
            result
        };

        season.simulate_season(&mut home_scores);

        let home = season.team(1).unwrap().players.players[0].clone();
        let away = season.team(2).unwrap().players.players[0].clone();

        assert_eq!(home[PlayerStatType::Goals], 1);
        assert_eq!(home[PlayerStatType::Tackles], 1);
        assert_eq!(away[PlayerStatType::Goals], 0);
        assert_eq!(away[PlayerStatType::Tackles], 0);
        assert_eq!(away[PlayerStatType::GamesPlayed], 1);
    }

    #[test]
    fn season_points_replace_team_points_system() {
        let custom = PointsSystem {
            win: 2,
            draw: 1,
            loss: 0,
        };
        let teams = vec![
            Team::builder().id(1).name("A").points_system(custom).build().unwrap(),
            Team::builder().id(2).name("B").points_system(custom).build().unwrap(),
        ];

        let season = Season::new(teams, SeasonSettings::default()).unwrap();

        assert!(season.teams().iter().all(|t| t.points_system == PointsSystem::default()));
    }
}
