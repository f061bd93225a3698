//! Single match runner
//!
//! Alternates two engines on one board until a player is stuck, overruns
//! its turn budget, or answers with a move that is not legal.

use log::{info, warn};

use crate::board::{GameBoard, Player, Pos};
use crate::engine::AIEngine;
use crate::search::Deadline;

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser had no legal move on its turn
    NoLegalMoves,
    /// The loser returned after its turn budget ran out
    Timeout,
    /// The loser answered with a move that was not legal
    IllegalMove,
}

/// Match result
#[derive(Debug, Clone)]
pub struct MatchOutcome<B> {
    pub winner: Player,
    pub loser: Player,
    pub reason: WinReason,
    /// Moves played, in order, starting with player one
    pub history: Vec<Pos>,
    /// Board when the match ended
    pub board: B,
}

/// Play `first` (player one) against `second` (player two) from `board`.
///
/// Each turn gets a fresh [`Deadline`] of `time_limit_ms`.
pub fn play_match<B: GameBoard>(
    first: &AIEngine<B>,
    second: &AIEngine<B>,
    mut board: B,
    time_limit_ms: u64,
) -> MatchOutcome<B> {
    let mut history = Vec::new();

    let (loser, reason) = loop {
        let player = board.active_player();
        let engine = match player {
            Player::One => first,
            Player::Two => second,
        };

        let legal = board.legal_moves();
        if legal.is_empty() {
            break (player, WinReason::NoLegalMoves);
        }

        let deadline = Deadline::after_ms(time_limit_ms);
        let time_left = || deadline.remaining_ms();
        let mv = engine.choose_move(&board, &legal, &time_left);

        if deadline.expired() {
            warn!(
                "{player} overran its {time_limit_ms}ms budget by {:.1}ms",
                -deadline.remaining_ms()
            );
            break (player, WinReason::Timeout);
        }
        if !legal.contains(&mv) {
            warn!("{player} played illegal move {mv}");
            break (player, WinReason::IllegalMove);
        }

        history.push(mv);
        board = board.apply_move(mv);
    };

    let winner = loser.opponent();
    info!("{winner} wins after {} moves ({reason:?})", history.len());
    MatchOutcome {
        winner,
        loser,
        reason,
        history,
        board,
    }
}
