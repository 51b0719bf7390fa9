use env_logger::Env;
use league_core::league::{Season, SeasonSettings};
use league_core::utils::TimeEstimation;
use league_core::{LeagueResult, Player, PlayerPositionType, RandomMatchSimulator};
use log::info;
use std::env;

const DEFAULT_TEAMS: usize = 8;

const TEAM_NAMES: [&str; 12] = [
    "Arsenal", "Benfica", "Celtic", "Dynamo", "Everton", "Feyenoord", "Galatasaray", "Hajduk",
    "Inter", "Juventus", "Lazio", "Marseille",
];

const SQUAD: [(PlayerPositionType, usize); 4] = [
    (PlayerPositionType::Goalkeeper, 2),
    (PlayerPositionType::Defender, 5),
    (PlayerPositionType::Midfielder, 5),
    (PlayerPositionType::Forward, 3),
];

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let teams_count = env::var("TEAMS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_TEAMS);

    let is_json_output = env::var("MODE") == Ok(String::from("JSON"));

    let mut simulator = match env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok()) {
        Some(seed) => {
            info!("using simulator seed: {}", seed);
            RandomMatchSimulator::with_seed(seed)
        }
        None => RandomMatchSimulator::new(),
    };

    let mut builder = Season::builder().settings(SeasonSettings::default());

    for idx in 0..teams_count {
        let name = team_name(idx);
        let players = generate_squad(&name, idx)?;

        builder = builder.team(name, players);
    }

    let mut season = builder.build()?;

    let (result, estimated) = TimeEstimation::estimate(|| season.simulate_season(&mut simulator));

    info!(
        "season simulated: {} weeks, {} games, {} goals, {} ms",
        result.weeks.len(),
        result.games_count(),
        result.goals(),
        estimated
    );

    let leaderboard = season.leaderboard();

    if is_json_output {
        println!("{}", serde_json::to_string_pretty(&leaderboard)?);
        return Ok(());
    }

    for (position, row) in leaderboard.iter().enumerate() {
        let form: Vec<String> = row.last_five_results.iter().map(|r| r.to_string()).collect();

        info!(
            "{:>2}. {:<12} P{:>3} Pts{:>3} W{:>3} D{:>3} L{:>3} GF{:>3} GA{:>3} GD{:>4} [{}]",
            position + 1,
            row.name,
            row.games_played,
            row.points,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            form.join(" ")
        );
    }

    Ok(())
}

fn team_name(idx: usize) -> String {
    TEAM_NAMES
        .get(idx)
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("Team {}", idx + 1))
}

fn generate_squad(team: &str, team_idx: usize) -> LeagueResult<Vec<Player>> {
    let mut players = Vec::new();

    for (position, count) in SQUAD {
        for n in 0..count {
            let age = 18 + ((team_idx * 7 + players.len() * 3) % 17) as u8;

            players.push(Player::new(
                format!("{} {} {}", team, position.get_short_name(), n + 1),
                position,
                age,
            )?);
        }
    }

    Ok(players)
}
