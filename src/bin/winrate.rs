use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use plotters::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tenthousand::{GameConfig, GameEngine, GameStatus};
use tenthousand::{create_bot_from_spec, label_for_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

/// Output format for the generated chart. Currently only PNG is supported.
#[derive(Clone, Debug, ValueEnum)]
enum ChartFormat {
    Png,
}

impl ChartFormat {
    fn from_path(path: &PathBuf) -> Option<Self> {
        match path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
        {
            Some(ext) if ext == "png" => Some(Self::Png),
            _ => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "winrate",
    about = "Run multiple games of 10,000 and plot per-bot win rates."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (dice + bot RNGs will be derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Output chart file (png)
    #[arg(short = 'o', long = "out", default_value = "winrates.png")]
    out: PathBuf,

    /// Explicit output format (inferred from --out when omitted)
    #[arg(long = "format", value_enum)]
    format: Option<ChartFormat>,

    /// Show a textual summary only (no chart)
    #[arg(long = "no-chart", action = ArgAction::SetTrue)]
    no_chart: bool,

    /// Safety cap on turns per game; games exceeding this are aborted (not counted as a win)
    #[arg(long = "max-turns", default_value_t = 5000)]
    max_turns: usize,

    /// Optional override for the win threshold, useful to shorten games.
    #[arg(long = "win")]
    win_threshold: Option<u32>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Player bot specs: e.g., greedy random (at least 2)
    bots: Vec<String>,
}

/// Aggregated numbers for one bot label.
#[derive(Debug, Default)]
struct LabelStats {
    wins: usize,
    seats: usize,
    points: u64,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.bots.len() < 2 {
        return Err(format!(
            "expected at least 2 players (e.g., greedy random), received {}",
            args.bots.len()
        )
        .into());
    }

    // Disallow human in batch sims; it would block waiting for input.
    if args
        .bots
        .iter()
        .any(|s| s.to_ascii_lowercase().starts_with("human"))
    {
        return Err("human players are not supported in winrate runs".into());
    }

    let mut stats: HashMap<String, LabelStats> = HashMap::new();
    let mut aborted_games: usize = 0;

    let base_seed = args.seed;
    let players_per_game = args.bots.len();
    let labels_for_spec: Vec<String> = args.bots.iter().map(|s| label_for_spec(s)).collect();
    let started = Instant::now();

    for game_idx in 0..args.games {
        // Permute seating each game for fairness.
        let mut indices: Vec<usize> = (0..players_per_game).collect();
        let mut seat_rng = StdRng::seed_from_u64(base_seed ^ 0x9E37_79B9 ^ (game_idx as u64));
        indices.shuffle(&mut seat_rng);

        let mut config = GameConfig {
            seed: mix_seed(base_seed, game_idx as u64, 0x5EED_15),
            max_turns: Some(args.max_turns),
            ..GameConfig::default()
        };
        if let Some(win) = args.win_threshold {
            config.win_threshold = win;
        }

        let mut builder = GameEngine::builder().with_config(config);
        let mut labels: Vec<String> = Vec::with_capacity(players_per_game);
        for (seat, src_idx) in indices.iter().enumerate() {
            let spec = &args.bots[*src_idx];
            let label = labels_for_spec[*src_idx].clone();
            let bot_seed = mix_seed(base_seed, game_idx as u64, seat as u64);
            let bot = create_bot_from_spec(spec, seat, bot_seed)?;
            builder = builder.with_player(format!("{label}-{seat}"), bot);
            stats.entry(label.clone()).or_default().seats += 1;
            labels.push(label);
        }
        let mut game = builder.build()?;
        let winners = game.run()?;

        if matches!(game.status(), GameStatus::Aborted) {
            aborted_games += 1;
        }
        for (seat, player) in game.players().iter().enumerate() {
            let entry = stats.entry(labels[seat].clone()).or_default();
            entry.points += player.total_points() as u64;
            if winners.contains(&seat) {
                entry.wins += 1;
            }
        }
        debug!(game = game_idx, turns = game.turn_index(), ?winners, "game complete");
    }
    info!(
        games = args.games,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "simulation finished"
    );

    // Compute per-seat win probability per label.
    let mut results: Vec<(String, f64, &LabelStats)> = stats
        .iter()
        .map(|(label, s)| {
            let rate = if s.seats > 0 {
                s.wins as f64 / s.seats as f64
            } else {
                0.0
            };
            (label.clone(), rate, s)
        })
        .collect();

    // Sort by rate desc, then by label.
    results.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    println!("Win rates (per-seat):");
    for (label, rate, s) in &results {
        let avg_points = if s.seats > 0 {
            s.points as f64 / (s.seats as f64)
        } else {
            0.0
        };
        println!(
            "  {label:<12}  {}/{}  ({:.2}%)   avg pts: {:>8.2}",
            s.wins,
            s.seats,
            rate * 100.0,
            avg_points
        );
    }
    if aborted_games > 0 {
        println!("\nNote: {aborted_games} game(s) hit the turn cap without a winner.");
    }

    if !args.no_chart {
        let format = args
            .format
            .or_else(|| ChartFormat::from_path(&args.out))
            .unwrap_or(ChartFormat::Png);
        if !matches!(format, ChartFormat::Png) {
            return Err("only PNG output is supported currently; use --out with .png".into());
        }
        let bars: Vec<(String, f64)> = results
            .iter()
            .map(|(label, rate, _)| (label.clone(), *rate))
            .collect();
        render_bar_chart(&args.out, &bars)?;
        println!("\nChart written to {}", args.out.display());
    }

    Ok(())
}

fn mix_seed(base: u64, a: u64, b: u64) -> u64 {
    // xorshift-style mix of the base seed with game and seat indices
    let mut z =
        base ^ (a.wrapping_mul(0x9E37_79B97F4A7C15)) ^ (b.wrapping_mul(0xBF58_476D1CE4E5B9));
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}

fn render_bar_chart(out: &PathBuf, data: &[(String, f64)]) -> Result<(), Box<dyn Error>> {
    let labels: Vec<String> = data.iter().map(|(l, _)| l.clone()).collect();
    let values: Vec<f64> = data.iter().map(|(_, r)| r * 100.0).collect();
    let max_value = values.iter().cloned().fold(0.0_f64, f64::max);

    let root = BitMapBackend::new(out, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "10,000 Bot Win Rates (per-seat)",
            ("sans-serif", 28).into_font(),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..labels.len(), 0.0f64..max_value.max(10.0))
        .map_err(|e| format!("{e}"))?;

    chart
        .configure_mesh()
        .y_desc("Win rate (%)")
        .x_desc("Bot type")
        .x_labels(labels.len())
        .x_label_formatter(&|idx| {
            if *idx < labels.len() {
                labels[*idx].clone()
            } else {
                idx.to_string()
            }
        })
        .y_label_formatter(&|v| format!("{v:.0}"))
        .light_line_style(&WHITE.mix(0.0))
        .draw()
        .map_err(|e| format!("{e}"))?;

    for (i, value) in values.iter().enumerate() {
        let rect = Rectangle::new([(i, 0.0), (i, *value)], BLUE.filled());
        chart
            .draw_series(std::iter::once(rect))
            .map_err(|e| format!("{e}"))?;
    }

    root.present().map_err(|e| format!("{e}"))?;
    Ok(())
}
