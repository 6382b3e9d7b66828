//! Headless runner: plays random legal moves and reports the result.
//!
//! Useful for smoke-testing the engine and for reproducing a game from a
//! seed without a terminal.

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{GridEngine, GridSize, SimpleRng, TileRng};
use crate::session::apply_action;
use crate::types::{Direction, GameAction};

/// Salt separating the move-picking stream from the tile-spawn stream.
const POLICY_SALT: u32 = 0x9e37_79b9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessArgs {
    pub seed: u32,
    pub size: GridSize,
    /// Stop after this many effective moves even if the game is not over.
    pub max_moves: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub seed: u32,
    pub size: u8,
    pub moves: u32,
    pub score: u32,
    pub max_tile: u32,
    pub game_over: bool,
    /// FNV-1a hash of the final board, for comparing runs
    pub board_hash: u64,
    pub grid: Vec<Vec<u32>>,
}

/// Parse `--seed <u32> --size <n> --max-moves <n>`.
///
/// `default_seed` and `default_size` fill in whatever is not given.
pub fn parse_args(args: &[String], default_seed: u32, default_size: GridSize) -> Result<HeadlessArgs> {
    let mut out = HeadlessArgs {
        seed: default_seed,
        size: default_size,
        max_moves: None,
    };

    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| anyhow!("headless: missing value for {}", flag))
        };
        match flag {
            "--seed" => {
                let v = value()?;
                out.seed = v
                    .parse()
                    .map_err(|_| anyhow!("headless: invalid --seed value: {}", v))?;
            }
            "--size" => {
                let v = value()?;
                out.size = v
                    .parse()
                    .ok()
                    .and_then(GridSize::new)
                    .ok_or_else(|| anyhow!("headless: invalid --size value: {}", v))?;
            }
            "--max-moves" => {
                let v = value()?;
                out.max_moves = Some(
                    v.parse()
                        .map_err(|_| anyhow!("headless: invalid --max-moves value: {}", v))?,
                );
            }
            other => return Err(anyhow!("headless: unknown argument: {}", other)),
        }
        i += 2;
    }

    Ok(out)
}

/// Play one game with uniformly random legal moves.
pub fn run(args: &HeadlessArgs) -> RunReport {
    let mut engine = GridEngine::new(args.size, args.seed);
    let mut policy = SimpleRng::new(args.seed ^ POLICY_SALT);
    engine.start();

    while !engine.is_terminal() {
        if args.max_moves.is_some_and(|max| engine.moves() >= max) {
            break;
        }
        let Some(direction) = pick_legal(&engine.legal_moves(), &mut policy) else {
            break;
        };
        apply_action(&mut engine, GameAction::from_direction(direction));
    }

    RunReport {
        seed: args.seed,
        size: args.size.get(),
        moves: engine.moves(),
        score: engine.score(),
        max_tile: engine.max_tile(),
        game_over: engine.is_terminal(),
        board_hash: engine.board_hash(),
        grid: engine.grid().to_rows(),
    }
}

fn pick_legal(legal: &[bool; 4], rng: &mut impl TileRng) -> Option<Direction> {
    let count = legal.iter().filter(|&&ok| ok).count() as u32;
    if count == 0 {
        return None;
    }
    let nth = rng.next_range(count) as usize;
    Direction::ALL
        .into_iter()
        .zip(legal.iter())
        .filter(|(_, &ok)| ok)
        .nth(nth)
        .map(|(d, _)| d)
}
