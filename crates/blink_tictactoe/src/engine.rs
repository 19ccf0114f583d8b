//! Move engine: applies one placement to a [`GameState`].
//!
//! A move is a single transaction. The engine validates against the current
//! state, builds the successor on a copy, and hands the copy back only if
//! everything succeeded. A rejected move therefore leaves nothing behind.

use super::action::{Move, MoveError};
use super::config::Categories;
use super::contracts::{Contract, MoveContract, SetupComplete};
use super::position::Position;
use super::rules::{Line, check_win, is_full};
use super::state::{GameState, Outcome, PlayerProfile};
use super::turn::advance;
use super::types::{Seat, Square, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument};

/// What a committed move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Seat that moved.
    pub seat: Seat,
    /// Where the piece went.
    pub position: Position,
    /// Symbol drawn for the piece.
    pub symbol: Symbol,
    /// Cell cleared by the vanishing rule, if any.
    pub vanished: Option<Position>,
    /// Winning line completed by this move.
    pub winning_line: Option<Line>,
    /// Outcome, if the move ended the game.
    pub outcome: Option<Outcome>,
}

/// Applies a move at `index` for the seat whose turn it is.
///
/// The symbol is drawn uniformly from the mover's category using `rng`;
/// nothing is drawn for a rejected move. On success returns the successor
/// state and a report; on failure `state` is still the authoritative state.
///
/// # Errors
///
/// - [`MoveError::SetupIncomplete`] when a seat has a blank name or category
/// - [`MoveError::GameAlreadyOver`] when an outcome is recorded
/// - [`MoveError::OutOfBounds`] when `index` is not 0-8
/// - [`MoveError::ConflictingVanish`] when `index` is the mover's oldest
///   piece and the mover already has three pieces
/// - [`MoveError::CellOccupied`] when the square holds any other piece
/// - [`MoveError::UnknownCategory`] / [`MoveError::EmptyCategory`] when the
///   mover's category cannot supply a symbol
#[instrument(skip(state, categories, rng), fields(turn = state.turn(), seat = ?state.to_move()))]
pub fn apply_move<R: Rng + ?Sized>(
    state: &GameState,
    index: usize,
    categories: &Categories,
    rng: &mut R,
) -> Result<(GameState, MoveReport), MoveError> {
    SetupComplete::check(state)?;
    if state.is_over() {
        return Err(MoveError::GameAlreadyOver);
    }
    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
    let seat = state.to_move();
    let action = Move::new(seat, position);

    MoveContract::pre(state, &action)?;

    let category = state.player(seat).category();
    let symbol = categories
        .symbols(category)
        .ok_or_else(|| MoveError::UnknownCategory(category.clone()))?
        .choose(rng)
        .cloned()
        .ok_or_else(|| MoveError::EmptyCategory(category.clone()))?;

    let vanished = state.queue(seat).vanish_target();

    // Everything below works on the copy; `state` is never touched.
    let mut next = state.clone();
    let queue = &mut next.queues[seat.index()];
    if vanished.is_some()
        && let Some((cleared, _)) = queue.pop_oldest()
    {
        next.board.clear(cleared);
        debug!(cleared = %cleared, "Oldest piece vanished");
    }
    queue.push(position, symbol.clone());
    next.board.set(position, Square::Filled(symbol.clone()));

    let winning_line = check_win(&next.board, next.queue(seat));
    let outcome = if let Some(line) = winning_line {
        info!(line = ?line.indices(), "Winning line completed");
        Some(Outcome::Winner(seat))
    } else if is_full(&next.board) {
        // Unreachable while each seat holds at most three pieces.
        Some(Outcome::Draw)
    } else {
        None
    };

    match outcome {
        Some(outcome) => {
            next.outcome = Some(outcome);
            next.winning_line = winning_line;
            next.scores.record(outcome);
        }
        None => next.turn = advance(next.turn),
    }

    #[cfg(debug_assertions)]
    MoveContract::post(state, &next)?;

    info!(position = %position, symbol = %symbol, ?vanished, "Move committed");

    let report = MoveReport {
        seat,
        position,
        symbol,
        vanished,
        winning_line,
        outcome,
    };
    Ok((next, report))
}

/// Plays `moves` from a fresh match and returns the final state.
///
/// Stops early when the game ends; remaining indices are ignored. Replaying
/// the same moves with an identically seeded `rng` yields the same state.
#[instrument(skip(categories, players, rng))]
pub fn replay<R: Rng + ?Sized>(
    categories: &Categories,
    players: [PlayerProfile; 2],
    rng: &mut R,
    moves: &[usize],
) -> Result<GameState, MoveError> {
    let mut state = GameState::new(players);
    for &index in moves {
        if state.is_over() {
            break;
        }
        let (next, _) = apply_move(&state, index, categories, rng)?;
        state = next;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerQueue;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn players() -> [PlayerProfile; 2] {
        [
            PlayerProfile::new("Ada", "Animals"),
            PlayerProfile::new("Bo", "Food"),
        ]
    }

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(7)
    }

    /// Seat one holds `cells` (oldest first) and it is seat one's turn.
    fn seat_one_holding(cells: [usize; 3]) -> GameState {
        let mut state = GameState::new(players());
        for index in cells {
            let pos = Position::from_index(index).expect("index");
            state.board.set(pos, Square::Filled(Symbol::from("🐶")));
            state.queues[0].push(pos, Symbol::from("🐶"));
        }
        state.turn = 6;
        state
    }

    #[test]
    fn first_move_places_and_advances() {
        let state = GameState::new(players());
        let (next, report) =
            apply_move(&state, 4, &Categories::builtin(), &mut rng()).expect("legal");

        assert_eq!(report.seat, Seat::One);
        assert_eq!(report.position, Position::Center);
        assert_eq!(report.vanished, None);
        assert!(Categories::builtin()
            .symbols("Animals")
            .expect("animals")
            .contains(&report.symbol));
        assert_eq!(next.board().get(Position::Center).symbol(), Some(&report.symbol));
        assert_eq!(next.turn(), 1);
        assert_eq!(next.to_move(), Seat::Two);
    }

    #[test]
    fn conflicting_vanish_leaves_state_identical() {
        let state = seat_one_holding([0, 1, 2]);
        let before = state.clone();

        let err = apply_move(&state, 0, &Categories::builtin(), &mut rng()).unwrap_err();

        assert_eq!(err, MoveError::ConflictingVanish(Position::TopLeft));
        assert_eq!(state, before);
        assert_eq!(state.to_move(), Seat::One);
    }

    #[test]
    fn vanish_then_continue() {
        let state = seat_one_holding([0, 1, 2]);
        let (next, report) =
            apply_move(&state, 5, &Categories::builtin(), &mut rng()).expect("legal");

        assert_eq!(report.vanished, Some(Position::TopLeft));
        assert!(next.board().is_empty(Position::TopLeft));
        assert!(!next.board().is_empty(Position::MiddleRight));
        assert_eq!(
            next.queue(Seat::One).cells().collect::<Vec<_>>(),
            vec![Position::TopCenter, Position::TopRight, Position::MiddleRight]
        );
        assert_eq!(next.queue(Seat::One).symbols().len(), PlayerQueue::CAPACITY);
        assert_eq!(next.winner(), None);
        assert_eq!(next.turn(), 7);
    }

    #[test]
    fn occupied_cell_rejected() {
        let state = seat_one_holding([0, 1, 2]);
        assert_eq!(
            apply_move(&state, 1, &Categories::builtin(), &mut rng()).unwrap_err(),
            MoveError::CellOccupied(Position::TopCenter)
        );
    }

    #[test]
    fn out_of_bounds_rejected() {
        let state = GameState::new(players());
        assert_eq!(
            apply_move(&state, 9, &Categories::builtin(), &mut rng()).unwrap_err(),
            MoveError::OutOfBounds(9)
        );
    }

    #[test]
    fn blank_players_are_setup_incomplete() {
        let state = GameState::new([PlayerProfile::new("", ""), PlayerProfile::new("Bo", "Food")]);
        let before = state.clone();
        assert_eq!(
            apply_move(&state, 0, &Categories::builtin(), &mut rng()).unwrap_err(),
            MoveError::SetupIncomplete
        );
        assert_eq!(state, before);

        let blank_names = [PlayerProfile::new("", "Animals"), PlayerProfile::new("   ", "Food")];
        assert_eq!(
            replay(&Categories::builtin(), blank_names, &mut rng(), &[0, 1]).unwrap_err(),
            MoveError::SetupIncomplete
        );
    }

    #[test]
    fn unknown_category_rejected() {
        let state = GameState::new([
            PlayerProfile::new("Ada", "Minerals"),
            PlayerProfile::new("Bo", "Food"),
        ]);
        let before = state.clone();
        assert_eq!(
            apply_move(&state, 0, &Categories::builtin(), &mut rng()).unwrap_err(),
            MoveError::UnknownCategory("Minerals".to_string())
        );
        assert_eq!(state, before);
    }

    #[test]
    fn column_win_scores_and_freezes_turn() {
        let state = replay(&Categories::builtin(), players(), &mut rng(), &[0, 1, 3, 4, 6])
            .expect("replay");

        assert_eq!(state.winner(), Some(Seat::One));
        assert_eq!(state.winning_line().map(|l| l.indices()), Some([0, 3, 6]));
        assert_eq!(state.turn(), 4);
        assert_eq!(state.scores().wins(Seat::One), 1);

        assert_eq!(
            apply_move(&state, 8, &Categories::builtin(), &mut rng()).unwrap_err(),
            MoveError::GameAlreadyOver
        );
    }
}
