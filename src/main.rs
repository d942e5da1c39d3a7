#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battlegrid::{
    init_logging_with, Battleship, Coord, GameConfig, Player, PlayerId, DEFAULT_BATTLESHIP_LENGTH,
    DEFAULT_BOARD_SIZE,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

/// Headless game: both fleets are placed at random and each side fires at
/// a shuffled sweep of the opponent's board until one fleet is gone.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    cols: usize,
    #[arg(long, default_value_t = DEFAULT_BATTLESHIP_LENGTH)]
    battleship_length: usize,
    #[arg(long, short, help = "Only log warnings and errors")]
    quiet: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with(if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    });

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = GameConfig {
        rows: cli.rows,
        cols: cli.cols,
        ..GameConfig::standard(cli.battleship_length)
    };
    let mut game = Battleship::new(config)?;
    game.start()?;
    game.place_fleet_randomly(PlayerId::One, &mut rng)?;
    game.place_fleet_randomly(PlayerId::Two, &mut rng)?;

    let mut sweeps = [
        sweep(cli.rows, cli.cols, &mut rng),
        sweep(cli.rows, cli.cols, &mut rng),
    ];
    let mut turn = PlayerId::One;
    while game.winner().is_none() {
        let idx = match turn {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        };
        let Some(coord) = sweeps[idx].pop() else {
            break;
        };
        game.attack_player(turn, turn.other(), coord)?;
        turn = turn.other();
    }

    let winner = match game.winner() {
        Some(id) => Some(game.player(id)?.name().to_string()),
        None => None,
    };
    let result = json!({
        "rows": cli.rows,
        "cols": cli.cols,
        "player1": summary(game.player(PlayerId::One)?),
        "player2": summary(game.player(PlayerId::Two)?),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// Every coordinate of a `rows × cols` board in random order.
#[cfg(feature = "std")]
fn sweep(rows: usize, cols: usize, rng: &mut SmallRng) -> Vec<Coord> {
    let mut coords: Vec<Coord> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| Coord::new(r, c)))
        .collect();
    coords.shuffle(rng);
    coords
}

#[cfg(feature = "std")]
fn summary(player: &Player) -> serde_json::Value {
    let hits = player
        .shots()
        .iter()
        .filter(|s| s.outcome == battlegrid::AttackOutcome::Hit)
        .count();
    json!({
        "name": player.name(),
        "shots": player.shots().len(),
        "hits": hits,
        "remaining_ships": player.remaining_ships(),
    })
}
