//! Stateless rendering: the Game view holds a Board view of nine Squares.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tictactoe_engine::{GameStatus, Player, Position, Square};

use crate::App;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const MOVES_WIDTH: u16 = 24;

const HELP: &str = "arrows: move  enter/space/1-9: play  click: play  r: new game  q: quit";

/// Screen regions of the Game view.
#[derive(Debug, Clone, Copy)]
struct GameLayout {
    title: Rect,
    board: Rect,
    moves: Rect,
    status: Rect,
    help: Rect,
}

fn game_layout(area: Rect) -> GameLayout {
    let [title, body, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let [board, moves] =
        Layout::horizontal([Constraint::Min(BOARD_WIDTH), Constraint::Length(MOVES_WIDTH)])
            .areas(body);

    GameLayout {
        title,
        board,
        moves,
        status,
        help,
    }
}

/// Cell and separator regions of the Board view.
#[derive(Debug, Clone, Copy)]
struct BoardLayout {
    cells: [Rect; 9],
    row_separators: [Rect; 2],
    col_separators: [Rect; 6],
}

fn board_layout(area: Rect) -> BoardLayout {
    let area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let [row0, sep0, row1, sep1, row2] = Layout::vertical([
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
    ])
    .areas(area);

    let mut cells = [Rect::default(); 9];
    let mut col_separators = [Rect::default(); 6];
    for (r, row) in [row0, row1, row2].into_iter().enumerate() {
        let [c0, s0, c1, s1, c2] = Layout::horizontal([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .areas(row);
        cells[r * 3..r * 3 + 3].copy_from_slice(&[c0, c1, c2]);
        col_separators[r * 2..r * 2 + 2].copy_from_slice(&[s0, s1]);
    }

    BoardLayout {
        cells,
        row_separators: [sep0, sep1],
        col_separators,
    }
}

/// Finds the board cell under a terminal coordinate, for mouse clicks.
///
/// `area` is the full frame the Game view is drawn into.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let cells = board_layout(game_layout(area).board).cells;
    Position::ALL.into_iter().find(|pos| {
        let cell = cells[pos.index()];
        column >= cell.x && column < cell.right() && row >= cell.y && row < cell.bottom()
    })
}

/// Renders the Game view.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = game_layout(frame.area());

    let title = Paragraph::new(app.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    draw_board(frame, layout.board, app);
    draw_moves(frame, layout.moves, app);
    draw_status(frame, layout.status, app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let layout = board_layout(area);
    let winning = app.game().winning_line();

    for pos in Position::ALL {
        let highlight = if winning.is_some_and(|line| line.contains(&pos)) {
            Some(Color::Green)
        } else if pos == app.cursor() && !app.game().is_over() {
            Some(Color::White)
        } else {
            None
        };
        draw_square(frame, layout.cells[pos.index()], app.game().board().get(pos), pos, highlight);
    }

    let separator_style = Style::default().fg(Color::DarkGray);
    for sep in layout.row_separators {
        let line = "─".repeat(sep.width as usize);
        frame.render_widget(Paragraph::new(line).style(separator_style), sep);
    }
    for sep in layout.col_separators {
        let bars = vec![Line::from("│"); sep.height as usize];
        frame.render_widget(Paragraph::new(bars).style(separator_style), sep);
    }
}

/// Renders one Square: its mark, or its key number when empty.
fn draw_square(frame: &mut Frame, area: Rect, square: Square, pos: Position, highlight: Option<Color>) {
    let (symbol, style) = match square {
        Square::Empty => (
            (pos.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match highlight {
        Some(bg) => style.bg(bg).fg(Color::Black),
        None => style,
    };

    let lines = vec![Line::from(""), Line::from(Span::raw(symbol)), Line::from("")];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let mut player = Player::X;
    let items: Vec<ListItem> = app
        .game()
        .moves()
        .iter()
        .enumerate()
        .map(|(i, pos)| {
            let item = ListItem::new(format!("{}. {} {}", i + 1, player, pos.label()));
            player = player.opponent();
            item
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Status line text for the current game.
pub fn status_text(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress { .. } => status.to_string(),
        GameStatus::Won(_) | GameStatus::Draw => format!("{} - press r for a new game", status),
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.game().status();
    let colour = match status {
        GameStatus::InProgress { .. } => Color::Yellow,
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
    };

    let paragraph = Paragraph::new(status_text(status))
        .style(Style::default().fg(colour))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(height) / 2),
        Constraint::Length(height),
        Constraint::Length(area.height.saturating_sub(height) / 2),
    ])
    .areas(area);

    let [_, centered, _] = Layout::horizontal([
        Constraint::Length(area.width.saturating_sub(width) / 2),
        Constraint::Length(width),
        Constraint::Length(area.width.saturating_sub(width) / 2),
    ])
    .areas(middle);

    centered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_hits_every_cell_centre() {
        let area = Rect::new(0, 0, 80, 24);
        let cells = board_layout(game_layout(area).board).cells;

        for pos in Position::ALL {
            let cell = cells[pos.index()];
            let (x, y) = (cell.x + cell.width / 2, cell.y + cell.height / 2);
            assert_eq!(cell_at(area, x, y), Some(pos));
        }
    }

    #[test]
    fn test_cell_at_misses_outside_board() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(cell_at(area, 0, 0), None);

        let sep = board_layout(game_layout(area).board).col_separators[0];
        assert_eq!(cell_at(area, sep.x, sep.y), None);
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let cells = board_layout(Rect::new(0, 0, 80, 24)).cells;
        for (i, a) in cells.iter().enumerate() {
            assert!(a.width > 0 && a.height > 0);
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            status_text(GameStatus::InProgress { next: Player::O }),
            "Next player: O"
        );
        assert_eq!(
            status_text(GameStatus::Won(Player::X)),
            "Winner: X - press r for a new game"
        );
        assert_eq!(status_text(GameStatus::Draw), "Draw - press r for a new game");
    }
}
