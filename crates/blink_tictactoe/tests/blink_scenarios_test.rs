//! End-to-end rule scenarios played through the public API.

use blink_tictactoe::{
    Categories, GameState, MoveError, Outcome, PlayerProfile, Position, Seat, apply_move, replay,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn players() -> [PlayerProfile; 2] {
    [
        PlayerProfile::new("Ada", "Animals"),
        PlayerProfile::new("Bo", "Food"),
    ]
}

fn play(moves: &[usize]) -> GameState {
    replay(
        &Categories::builtin(),
        players(),
        &mut ChaCha20Rng::seed_from_u64(3),
        moves,
    )
    .expect("legal moves")
}

fn cells(state: &GameState, seat: Seat) -> Vec<usize> {
    state.queue(seat).cells().map(Position::to_index).collect()
}

#[test]
fn left_column_wins_for_player_one() {
    let state = play(&[0, 1, 3, 4, 6]);

    assert_eq!(state.outcome(), Some(Outcome::Winner(Seat::One)));
    assert_eq!(state.winning_line().map(|l| l.indices()), Some([0, 3, 6]));
    assert_eq!(cells(&state, Seat::One), vec![0, 3, 6]);
    // Four moves advanced the counter; the winning fifth did not.
    assert_eq!(state.turn(), 4);
    assert_eq!(state.status_line(), "Ada Wins!");
    assert_eq!(state.scores().wins(Seat::One), 1);
}

#[test]
fn targeting_own_vanishing_piece_is_rejected_atomically() {
    // Seat one: [0, 1, 5], seat two: [4, 8, 6], seat one to move.
    let state = play(&[0, 4, 1, 8, 5, 6]);
    assert_eq!(state.to_move(), Seat::One);
    assert_eq!(cells(&state, Seat::One), vec![0, 1, 5]);
    let before = state.clone();

    let err = apply_move(
        &state,
        0,
        &Categories::builtin(),
        &mut ChaCha20Rng::seed_from_u64(9),
    )
    .unwrap_err();

    assert_eq!(err, MoveError::ConflictingVanish(Position::TopLeft));
    assert_eq!(state, before);
    assert_eq!(state.to_move(), Seat::One);
}

#[test]
fn fourth_piece_evicts_the_oldest() {
    let state = play(&[0, 4, 1, 8, 5, 6]);
    let (next, report) = apply_move(
        &state,
        3,
        &Categories::builtin(),
        &mut ChaCha20Rng::seed_from_u64(9),
    )
    .expect("legal");

    assert_eq!(report.vanished, Some(Position::TopLeft));
    assert!(next.board().is_empty(Position::TopLeft));
    assert!(!next.board().is_empty(Position::MiddleLeft));
    assert_eq!(cells(&next, Seat::One), vec![1, 5, 3]);
    assert_eq!(next.owner(Position::MiddleLeft), Some(Seat::One));
    assert_eq!(next.to_move(), Seat::Two);
}

#[test]
fn vanished_cell_is_free_for_the_opponent() {
    // Seat one's seventh move evicts cell 0; seat two then takes it.
    let state = play(&[0, 4, 1, 8, 5, 6, 3, 0]);
    assert_eq!(state.owner(Position::TopLeft), Some(Seat::Two));
    assert_eq!(cells(&state, Seat::Two), vec![8, 6, 0]);
}

#[test]
fn occupied_and_finished_moves_are_rejected() {
    let state = play(&[4]);
    assert_eq!(
        apply_move(
            &state,
            4,
            &Categories::builtin(),
            &mut ChaCha20Rng::seed_from_u64(1)
        )
        .unwrap_err(),
        MoveError::CellOccupied(Position::Center)
    );

    let won = play(&[0, 1, 3, 4, 6]);
    assert_eq!(
        apply_move(
            &won,
            8,
            &Categories::builtin(),
            &mut ChaCha20Rng::seed_from_u64(1)
        )
        .unwrap_err(),
        MoveError::GameAlreadyOver
    );
}

#[test]
fn replay_is_deterministic_per_seed() {
    let moves = [4, 0, 8, 2, 6, 1];
    let a = replay(
        &Categories::builtin(),
        players(),
        &mut ChaCha20Rng::seed_from_u64(77),
        &moves,
    )
    .expect("legal");
    let b = replay(
        &Categories::builtin(),
        players(),
        &mut ChaCha20Rng::seed_from_u64(77),
        &moves,
    )
    .expect("legal");
    assert_eq!(a, b);
}

#[test]
fn replay_stops_after_the_game_ends() {
    let state = play(&[0, 1, 3, 4, 6, 7, 8]);
    assert_eq!(state.winner(), Some(Seat::One));
    assert!(state.board().is_empty(Position::BottomCenter));
}

#[test]
fn reset_clears_board_and_keeps_scores() {
    let mut state = play(&[0, 1, 3, 4, 6]);
    state.reset();

    assert_eq!(state.board().occupied_count(), 0);
    assert!(state.queue(Seat::One).is_empty());
    assert!(state.queue(Seat::Two).is_empty());
    assert_eq!(state.turn(), 0);
    assert_eq!(state.outcome(), None);
    assert_eq!(state.winning_line(), None);
    assert_eq!(state.scores().wins(Seat::One), 1);

    let again = state.clone();
    state.reset();
    assert_eq!(state, again);
}

#[test]
fn reset_mid_game_with_full_queues() {
    let mut state = play(&[0, 4, 1, 8, 5, 6]);
    assert_eq!(state.queue(Seat::One).vanish_target(), Some(Position::TopLeft));
    assert_eq!(state.queue(Seat::Two).vanish_target(), Some(Position::Center));
    assert_eq!(state.outcome(), None);

    state.reset();
    let once = state.clone();
    state.reset();

    assert_eq!(state, once);
    assert_eq!(state.board().occupied_count(), 0);
    assert_eq!(state.queue(Seat::One).vanish_target(), None);
    assert_eq!(state.queue(Seat::Two).vanish_target(), None);
    assert_eq!(state.turn(), 0);
    assert_eq!(state.to_move(), Seat::One);
    assert_eq!(state.scores().wins(Seat::One), 0);
    assert_eq!(state.scores().wins(Seat::Two), 0);
}
