//! Rules of the k-in-a-row family checked through the public API.

use kinrow::alpha_beta_searcher::Game;
use kinrow::board::{Coordinate, Direction, Mark};
use kinrow::game::{create_game, win, GameState, KInARow};
use kinrow::player::{Player, RandomPlayer};

fn play(game: &KInARow, moves: &[(u8, u8)]) -> GameState {
    moves.iter().fold(game.initial_state(), |state, &(x, y)| {
        game.result(&state, &Coordinate::new(x, y))
    })
}

/// Every state along a few seeded random games.
fn random_states(game: &KInARow, games: u64) -> Vec<(GameState, Option<Coordinate>)> {
    let mut states = Vec::new();
    for seed in 0..games {
        let mut player = RandomPlayer::seeded(seed);
        let mut state = game.initial_state();
        let mut last_move = None;
        states.push((state.clone(), last_move));
        while !game.terminal_test(&state) {
            let chosen = player.choose_move(game, &state).unwrap().unwrap();
            state = game.result(&state, &chosen);
            last_move = Some(chosen);
            states.push((state.clone(), last_move));
        }
    }
    states
}

#[test]
fn test_tic_tac_toe_diagonal_win() {
    let game = create_game(3, 3, 3, false);
    let state = play(&game, &[(2, 2), (1, 2), (1, 1), (1, 3)]);
    assert!(!game.terminal_test(&state));

    let state = game.result(&state, &Coordinate::new(3, 3));
    assert!(game.terminal_test(&state));
    assert_eq!(game.utility(&state, Mark::First), 1);
    assert_eq!(game.utility(&state, Mark::Second), -1);
}

#[test]
fn test_connect_four_column_stacking() {
    let game = create_game(6, 7, 4, true);
    let mut state = game.initial_state();

    for x in (1..=6).rev() {
        let coordinate = Coordinate::new(x, 4);
        for above in 1..x {
            let floating = Coordinate::new(above, 4);
            assert!(!game.actions(&state).contains(&floating));
            assert_eq!(game.result(&state, &floating), state);
        }
        assert!(game.actions(&state).contains(&coordinate));
        state = game.result(&state, &coordinate);
    }

    assert!(game.actions(&state).iter().all(|action| action.y != 4));
    assert_eq!(game.actions(&state).len(), 6);
}

#[test]
fn test_terminal_iff_decided_or_no_actions() {
    for game in [KInARow::tic_tac_toe(), KInARow::connect_four()].iter() {
        for (state, _) in random_states(game, 20) {
            let decided = Mark::ALL
                .iter()
                .any(|mark| game.utility(&state, *mark) != 0);
            assert_eq!(
                game.terminal_test(&state),
                decided || game.actions(&state).is_empty(),
                "\n{}",
                state.board()
            );
        }
    }
}

#[test]
fn test_illegal_moves_change_nothing() {
    let game = KInARow::connect_four();
    for (state, _) in random_states(&game, 3) {
        let actions = game.actions(&state);
        let off_board = [Coordinate::new(7, 1), Coordinate::new(1, 8), Coordinate::new(0, 0)];
        for coordinate in state.board().coordinates().chain(off_board.iter().copied()) {
            if !actions.contains(&coordinate) {
                assert_eq!(game.result(&state, &coordinate), state);
            }
        }
    }
}

#[test]
fn test_actions_and_result_are_pure() {
    let game = KInARow::connect_four();
    for (state, _) in random_states(&game, 3) {
        let snapshot = state.clone();
        let actions = game.actions(&state);
        for action in actions.iter() {
            let _ = game.result(&state, action);
        }
        assert_eq!(state, snapshot);
        assert_eq!(game.actions(&state), actions);
    }
}

#[test]
fn test_win_detection_is_direction_symmetric() {
    for game in [KInARow::tic_tac_toe(), KInARow::connect_four()].iter() {
        let k = game.config().k;
        for (state, last_move) in random_states(game, 20) {
            let last_move = match last_move {
                Some(last_move) => last_move,
                None => continue,
            };
            let mark = game.to_move(&state).opposite();
            for direction in Direction::LINES.iter() {
                assert_eq!(
                    win::k_in_row(state.board(), last_move, mark, *direction, k),
                    win::k_in_row(state.board(), last_move, mark, direction.reverse(), k)
                );
            }
            let won = win::winning_line(state.board(), last_move, mark, k).is_some();
            assert_eq!(won, game.utility(&state, mark) == 1);
        }
    }
}

#[test]
fn test_custom_board_sizes() {
    // gomoku-style free placement on a wide board
    let game = create_game(5, 9, 5, false);
    let state = play(
        &game,
        &[(3, 5), (1, 1), (3, 6), (1, 2), (3, 7), (1, 3), (3, 8), (1, 4)],
    );
    assert!(!game.terminal_test(&state));
    let state = game.result(&state, &Coordinate::new(3, 9));
    assert_eq!(game.utility(&state, Mark::First), 1);

    // a run longer than every line never wins
    let game = create_game(2, 2, 3, false);
    let state = play(&game, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    assert!(game.terminal_test(&state));
    assert_eq!(game.utility(&state, Mark::First), 0);
    assert!(game.config().validate().is_err());
}
