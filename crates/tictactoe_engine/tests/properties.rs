//! Property tests for the rules and the engine.

use proptest::prelude::*;
use tictactoe_engine::invariants::{GameInvariants, InvariantSet};
use tictactoe_engine::rules::{winning_line, LINES};
use tictactoe_engine::{calculate_winner, Board, Game, GameStatus, Player, Square};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn any_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn owns_a_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
}

proptest! {
    #[test]
    fn winner_is_pure(board in any_board()) {
        let first = calculate_winner(&board);
        for _ in 0..3 {
            prop_assert_eq!(calculate_winner(&board), first);
        }
    }

    #[test]
    fn winner_owns_the_reported_line(board in any_board()) {
        match winning_line(&board) {
            Some((player, line)) => {
                for pos in line {
                    prop_assert_eq!(board.get(pos), Square::Occupied(player));
                }
                prop_assert_eq!(calculate_winner(&board), Some(player));
            }
            None => {
                prop_assert!(!owns_a_line(&board, Player::X));
                prop_assert!(!owns_a_line(&board, Player::O));
            }
        }
    }

    #[test]
    fn filled_line_wins(line_idx in 0usize..8, player in any_player(), rest in prop::array::uniform9(square())) {
        let mut board = Board::from_squares(rest);
        for pos in LINES[line_idx] {
            board = board.with_mark(pos, player);
        }
        if !owns_a_line(&board, player.opponent()) {
            prop_assert_eq!(calculate_winner(&board), Some(player));
        }
    }

    #[test]
    fn any_move_sequence_keeps_invariants(indices in prop::collection::vec(0usize..12, 0..20)) {
        let mut game = Game::new();
        for index in indices {
            let before = game.clone();
            let was_over = before.winner().is_some();

            match game.apply_move(index) {
                Ok(board) => {
                    prop_assert!(!was_over);
                    prop_assert_eq!(&board, game.board());
                    prop_assert_eq!(game.turn(), before.turn().opponent());
                    prop_assert_eq!(game.moves().len(), before.moves().len() + 1);
                }
                Err(_) => {
                    prop_assert_eq!(&game, &before);
                }
            }

            prop_assert!(GameInvariants::check_all(&game).is_ok());

            let x = game.board().count(Player::X);
            let o = game.board().count(Player::O);
            prop_assert!(x == o || x == o + 1);

            if let GameStatus::InProgress { next } = game.status() {
                prop_assert_eq!(next, game.turn());
            }
        }
    }
}
