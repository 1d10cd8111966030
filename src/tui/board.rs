//! Stateless board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::Paragraph,
};
use tictac_engine::{BOARD_SIDE, Board, Coord, Line};

use crate::tui::theme::{SymbolSet, Theme};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// What to draw on top of the marks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView {
    /// Cell under the keyboard cursor, if the cursor is shown.
    pub cursor: Option<Coord>,
    /// Winning line to highlight this frame.
    pub highlight: Option<Line>,
}

/// Draws `board` centred in `area`.
pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    view: BoardView,
    theme: &Theme,
    symbols: SymbolSet,
) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for row in 0..BOARD_SIDE {
        draw_row(frame, rows[row * 2], board, row, view, theme, symbols);
        if row + 1 < BOARD_SIDE {
            draw_separator(frame, rows[row * 2 + 1], theme);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    row: usize,
    view: BoardView,
    theme: &Theme,
    symbols: SymbolSet,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..BOARD_SIDE {
        if let Ok(coord) = Coord::new(row, col) {
            draw_cell(frame, cols[col * 2], board, coord, view, theme, symbols);
        }
        if col + 1 < BOARD_SIDE {
            let sep = Paragraph::new(vec![TextLine::from("│"); CELL_HEIGHT as usize])
                .style(theme.help_style());
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    coord: Coord,
    view: BoardView,
    theme: &Theme,
    symbols: SymbolSet,
) {
    let cell = board.get(coord);
    let mut style = match cell.mark() {
        Some(player) => Style::default()
            .fg(theme.player_color(player))
            .add_modifier(Modifier::BOLD),
        None => theme.help_style(),
    };

    if view.highlight.is_some_and(|line| line.contains(coord)) {
        style = style.bg(theme.highlight).fg(theme.background);
    }
    if view.cursor == Some(coord) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let symbol = format!("  {}  ", symbols.cell(cell));
    let lines = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(symbol, style)),
        TextLine::from(""),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
    let width = usize::from(BOARD_WIDTH);
    let sep = Paragraph::new("─".repeat(width)).style(theme.help_style());
    frame.render_widget(sep, area);
}

/// Returns a `width` x `height` rectangle centred in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
