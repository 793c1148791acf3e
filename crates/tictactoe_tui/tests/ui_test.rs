//! Rendering tests against an in-memory terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tictactoe_tui::{ui, App};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    terminal.draw(|frame| ui::draw(frame, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

#[test]
fn test_new_game_screen() {
    let screen = render(&App::new("Tic Tac Toe"));

    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Moves"));
}

#[test]
fn test_moves_listed_and_turn_shown() {
    let mut app = App::new("Tic Tac Toe");
    press(&mut app, '5');
    press(&mut app, '1');

    let screen = render(&app);
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("1. X Center"));
    assert!(screen.contains("2. O Top-left"));
}

#[test]
fn test_winner_shown() {
    let mut app = App::new("Tic Tac Toe");
    for c in ['1', '4', '2', '5', '3'] {
        press(&mut app, c);
    }

    let screen = render(&app);
    assert!(screen.contains("Winner: X - press r for a new game"));
}

#[test]
fn test_draw_shown() {
    let mut app = App::new("Tic Tac Toe");
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, c);
    }

    let screen = render(&app);
    assert!(screen.contains("Draw - press r for a new game"));
}
