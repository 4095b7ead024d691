//! Match command - automated games between computer opponents
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: RNG and formatting utilities

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tictac_core::{
    Game, HeuristicSource, Marker, MoveSource, Outcome, RandomSource, Status,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Number of games to play (the first mover alternates)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Pit the heuristic (X) against a random baseline (O) instead of itself
    #[arg(long)]
    pub random: bool,

    /// RNG seed for reproducible matches
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    outcome: Outcome,
    moves: usize,
    first: Marker,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    x_wins: usize,
    o_wins: usize,
    ties: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
pub fn run(args: MatchArgs) -> Result<()> {
    tracing::info!(
        "Starting match: X=heuristic vs O={} ({} games)",
        if args.random { "random" } else { "heuristic" },
        args.games
    );

    let results = play_match(&args)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(args: &MatchArgs) -> Result<MatchResults> {
    let mut rng = create_rng(args.seed);
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        // Alternate the first mover for fairness
        let first = if game_num % 2 == 0 { Marker::X } else { Marker::O };

        let record = play_single_game(game_num + 1, first, args, &mut rng)?;

        tracing::info!(
            "Game {}: {:?} ({} moves)",
            record.game_number,
            record.outcome,
            record.moves
        );

        games.push(record);
    }

    Ok(compute_match_statistics(games))
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play a single game between the two configured opponents
fn play_single_game(
    game_number: usize,
    first: Marker,
    args: &MatchArgs,
    rng: &mut ChaCha8Rng,
) -> Result<GameRecord> {
    let mut x_source: Box<dyn MoveSource> =
        Box::new(HeuristicSource::with_seed(Marker::X, rng.gen()));
    let mut o_source: Box<dyn MoveSource> = if args.random {
        Box::new(RandomSource::with_seed(rng.gen()))
    } else {
        Box::new(HeuristicSource::with_seed(Marker::O, rng.gen()))
    };

    let mut game = Game::new(first);
    let mut moves = 0;

    let outcome = loop {
        let active = match game.status() {
            Status::Terminal(outcome) => break outcome,
            Status::AwaitingMove(marker) => marker,
        };
        let source = match active {
            Marker::X => &mut x_source,
            Marker::O => &mut o_source,
        };

        let position = source.next_move(game.board())?;
        game.play(position)?;
        moves += 1;
    };

    Ok(GameRecord {
        game_number,
        outcome,
        moves,
        first,
    })
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let x_wins = games
        .iter()
        .filter(|g| g.outcome == Outcome::Win(Marker::X))
        .count();
    let o_wins = games
        .iter()
        .filter(|g| g.outcome == Outcome::Win(Marker::O))
        .count();
    let ties = games.iter().filter(|g| g.outcome == Outcome::Tie).count();

    let total_moves: usize = games.iter().map(|g| g.moves).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        games,
        x_wins,
        o_wins,
        ties,
        avg_moves,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or entropy
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn outcome_label(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(marker) => format!("{marker} wins"),
        Outcome::Tie => "tie".to_string(),
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        outcome: String,
        moves: usize,
        first: String,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        x_wins: usize,
        o_wins: usize,
        ties: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        x_wins: results.x_wins,
        o_wins: results.o_wins,
        ties: results.ties,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                outcome: outcome_label(g.outcome),
                moves: g.moves,
                first: g.first.to_string(),
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();
    let pct = |count: usize| {
        if total > 0 {
            count as f32 / total as f32 * 100.0
        } else {
            0.0
        }
    };

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!("X wins:      {} ({:.1}%)", results.x_wins, pct(results.x_wins));
    println!("O wins:      {} ({:.1}%)", results.o_wins, pct(results.o_wins));
    println!("Ties:        {} ({:.1}%)", results.ties, pct(results.ties));
    println!("Avg moves:   {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: {} in {} moves ({} first)",
            game.game_number,
            outcome_label(game.outcome),
            game.moves,
            game.first
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
