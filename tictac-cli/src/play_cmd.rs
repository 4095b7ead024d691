//! Play command - interactive rounds against the computer
//!
//! The human always plays X and moves first; the computer plays O. Win
//! counters live here, outside the core, and survive board resets between
//! rounds.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use tictac_core::{Board, Game, HeuristicSource, Marker, MoveSource, Outcome, Player, Status};

use crate::render::format_board;

const HUMAN_MARKER: Marker = Marker::X;
const COMPUTER_MARKER: Marker = Marker::O;

#[derive(Args)]
pub struct PlayArgs {
    /// Your display name (prompted for when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Seed for the computer's random fallback
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Win counters across rounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Scores {
    human_wins: u32,
    computer_wins: u32,
    ties: u32,
}

impl Scores {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(HUMAN_MARKER) => self.human_wins += 1,
            Outcome::Win(_) => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

pub fn run(args: PlayArgs) -> Result<()> {
    println!("Welcome to Tic-Tac-Toe!");

    let name = match args.name {
        Some(name) => name,
        None => prompt_line("\nWhat is your name?")?,
    };

    let computer_source = match args.seed {
        Some(seed) => HeuristicSource::with_seed(COMPUTER_MARKER, seed),
        None => HeuristicSource::new(COMPUTER_MARKER),
    };

    let mut human = Player::new(
        name,
        HUMAN_MARKER,
        Box::new(InteractiveSource),
    );
    let mut computer = Player::new("Computer", COMPUTER_MARKER, Box::new(computer_source));

    let mut scores = Scores::default();
    let mut game = Game::new(HUMAN_MARKER);

    loop {
        let outcome = play_round(&mut game, &mut human, &mut computer)?;
        scores.record(outcome);
        announce_outcome(outcome, &human, &computer);
        print_scores(&scores, &human);

        if !prompt_replay()? {
            break;
        }
        game.reset();
    }

    Ok(())
}

/// Drive one round to its terminal state, rendering after every mark
fn play_round(game: &mut Game, human: &mut Player, computer: &mut Player) -> Result<Outcome> {
    println!("{}", format_board(game.board()));

    loop {
        let active = match game.status() {
            Status::Terminal(outcome) => return Ok(outcome),
            Status::AwaitingMove(marker) => marker,
        };

        let player = if active == human.marker() {
            &mut *human
        } else {
            println!("{} is choosing a square...", computer.name());
            &mut *computer
        };

        let position = player.next_move(game.board())?;
        game.play(position)
            .with_context(|| format!("{} played an unplayable square {}", player.name(), position))?;

        println!("{}", format_board(game.board()));
    }
}

/// Interactive move source: re-prompts until the input is an open square
struct InteractiveSource;

impl MoveSource for InteractiveSource {
    fn next_move(&mut self, board: &Board) -> Result<u8> {
        let open = board.empty_positions();
        loop {
            let line = prompt_line("Please choose a square (1 - 9)")?;
            match line.trim().parse::<u8>() {
                Ok(position) if open.contains(&position) => return Ok(position),
                _ => println!("Please choose an empty square."),
            }
        }
    }
}

fn announce_outcome(outcome: Outcome, human: &Player, computer: &Player) {
    match outcome {
        Outcome::Win(marker) if marker == human.marker() => {
            println!("{} won!", human.name());
        }
        Outcome::Win(_) => println!("{} won!", computer.name()),
        Outcome::Tie => println!("It's a tie!"),
    }
}

fn print_scores(scores: &Scores, human: &Player) {
    println!(
        "\nScore: {} {} - Computer {} - ties {}",
        human.name(),
        scores.human_wins,
        scores.computer_wins,
        scores.ties
    );
}

fn prompt_replay() -> Result<bool> {
    let answer = prompt_line("\nAnother round? (Enter 'y' for another round or any key to exit)")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Print a prompt and read one trimmed line from stdin
fn prompt_line(prompt: &str) -> Result<String> {
    println!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_record() {
        let mut scores = Scores::default();
        scores.record(Outcome::Win(HUMAN_MARKER));
        scores.record(Outcome::Win(COMPUTER_MARKER));
        scores.record(Outcome::Tie);
        scores.record(Outcome::Win(HUMAN_MARKER));

        assert_eq!(
            scores,
            Scores {
                human_wins: 2,
                computer_wins: 1,
                ties: 1,
            }
        );
    }
}
