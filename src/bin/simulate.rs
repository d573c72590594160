use std::error::Error;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tenthousand::game::{DEFAULT_ENTRY_THRESHOLD, DEFAULT_ROUND_THRESHOLD, DEFAULT_WIN_THRESHOLD};
use tenthousand::{
    GameConfig, GameEngine, create_bot_from_spec, describe_status, describe_turn,
    label_for_spec, render_standings,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play a single game of 10,000 between bots.")]
struct Args {
    /// Seed for the dice and the random bots
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Points needed to win
    #[arg(long = "win", default_value_t = DEFAULT_WIN_THRESHOLD)]
    win_threshold: u32,

    /// Points a single turn must reach before a player enters the game
    #[arg(long = "entry", default_value_t = DEFAULT_ENTRY_THRESHOLD)]
    entry_threshold: u32,

    /// Minimum points per successful turn
    #[arg(long = "round", default_value_t = DEFAULT_ROUND_THRESHOLD)]
    round_threshold: u32,

    /// Stop after the specified number of turns
    #[arg(long = "max-turns")]
    max_turns: Option<usize>,

    /// Print every turn
    #[arg(long = "visualize")]
    visualize: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Player specs: human[:name], random[:seed], greedy[:target], nothing
    bots: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let bot_specs = if args.bots.is_empty() {
        vec![String::from("human"), String::from("greedy")]
    } else {
        args.bots.clone()
    };

    let config = GameConfig {
        win_threshold: args.win_threshold,
        entry_threshold: args.entry_threshold,
        round_threshold: args.round_threshold,
        seed: args.seed,
        max_turns: args.max_turns,
        ..GameConfig::default()
    };
    let mut builder = GameEngine::builder().with_config(config);
    for (index, spec) in bot_specs.iter().enumerate() {
        let bot = create_bot_from_spec(spec, index, args.seed)?;
        builder = builder.with_player(format!("{}-{index}", label_for_spec(spec)), bot);
    }
    let mut game = builder.build()?;

    println!(
        "Starting 10,000 simulation with {} players.\n",
        bot_specs.len()
    );
    let visualize = args.visualize;
    game.run_observed(|report, players| {
        if visualize {
            println!("{}", describe_turn(report, players));
        }
    })?;

    println!("\n{}", render_standings(game.players(), None));
    println!(
        "Game {} after {} turns.",
        describe_status(game.status(), game.players()),
        game.turn_index()
    );
    Ok(())
}
