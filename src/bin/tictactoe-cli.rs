//! Tic-Tac-Toe terminal client
//!
//! Plays one game against the minimax AI on stdin/stdout. Cells are
//! numbered 1-9 left to right, top to bottom.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tictactoe::{apply_move, evaluate, AIEngine, Board, Mark, Outcome, Pos, ScoringMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe-cli", about = "Play Tic-Tac-Toe against a minimax AI in the terminal")]
struct Args {
    /// Mark the human plays; X moves first
    #[arg(long, value_enum, default_value = "x")]
    human: Side,

    /// Prefer faster wins and slower losses
    #[arg(long)]
    depth_adjusted: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let human = Mark::from(args.human);
    let scoring = if args.depth_adjusted {
        ScoringMode::DepthAdjusted
    } else {
        ScoringMode::Flat
    };
    let mut engine = AIEngine::with_scoring(human.opponent(), scoring);

    println!("===========================================");
    println!("     Tic-Tac-Toe vs Minimax AI v0.1.0");
    println!("===========================================");
    println!("You play {}. Enter 1-9 to move, q to quit.\n", human);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = Board::new();
    let mut turn = Mark::X;

    while !evaluate(&board).is_terminal() {
        if turn == human {
            print_board(&board);
            print!("Your move: ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let input = line?;
            let input = input.trim();
            if input.eq_ignore_ascii_case("q") {
                println!("Bye!");
                return Ok(());
            }

            let pos = match parse_cell(input) {
                Some(pos) => pos,
                None => {
                    println!("  Enter a number from 1 to 9.");
                    continue;
                }
            };
            match apply_move(&board, pos, turn) {
                Ok(next) => board = next,
                Err(err) => {
                    println!("  {}", err);
                    continue;
                }
            }
        } else {
            let result = engine.get_move_with_stats(&board);
            // The loop condition guarantees a non-terminal board here
            let Some(pos) = result.best_move else { break };
            info!(index = pos.to_index(), score = result.score, "AI move");
            println!(
                "AI plays {} (score {}, {} nodes, {}ms)",
                pos.to_index() + 1,
                result.score,
                result.nodes,
                result.time_ms
            );
            board = board.with_mark(pos, turn);
        }
        turn = turn.opponent();
    }

    println!();
    print_board(&board);
    match evaluate(&board) {
        Outcome::Win(mark) if mark == human => println!("You win!"),
        Outcome::Win(mark) => println!("Player {} wins!", mark),
        _ => println!("It's a tie!"),
    }
    Ok(())
}

/// Parse a 1-based cell number
fn parse_cell(input: &str) -> Option<Pos> {
    let n: usize = input.parse().ok()?;
    Pos::try_from_index(n.checked_sub(1)?)
}

fn print_board(board: &Board) {
    for (row, line) in board.to_string().lines().enumerate() {
        let cells: Vec<String> = line
            .chars()
            .enumerate()
            .map(|(col, c)| match c {
                '.' => (row * 3 + col + 1).to_string(),
                mark => mark.to_string(),
            })
            .collect();
        println!("  {}", cells.join(" | "));
        if row < 2 {
            println!("  --+---+--");
        }
    }
}
