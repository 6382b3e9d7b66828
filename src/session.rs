//! Action dispatch shared by the interactive and headless front-ends.
//!
//! Front-ends translate their input into [`GameAction`]s and hand them here;
//! this is the only place that turns actions into engine calls, and it is
//! where game events are logged.

use tracing::{debug, info, trace};

use crate::core::{GridEngine, TileRng};
use crate::types::GameAction;

/// Apply one action. Returns true when the view needs to be redrawn.
pub fn apply_action<R: TileRng>(engine: &mut GridEngine<R>, action: GameAction) -> bool {
    let Some(direction) = action.direction() else {
        info!(
            episode = engine.episode_id(),
            score = engine.score(),
            max_tile = engine.max_tile(),
            moves = engine.moves(),
            "restart"
        );
        engine.restart();
        return true;
    };

    let outcome = engine.play(direction);
    if !outcome.moved.changed {
        trace!(direction = direction.as_str(), "move had no effect");
        return false;
    }

    debug!(
        direction = direction.as_str(),
        gained = outcome.moved.score_gained,
        merges = outcome.moved.merges,
        score = engine.score(),
        spawned = outcome.spawned,
        board_hash = engine.board_hash(),
        "move"
    );

    if outcome.terminal {
        info!(
            episode = engine.episode_id(),
            score = engine.score(),
            max_tile = engine.max_tile(),
            moves = engine.moves(),
            board_hash = engine.board_hash(),
            "game over"
        );
    }
    true
}
