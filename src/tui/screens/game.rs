//! Game screen: the board, the scoreboard and the status line.
//!
//! A [`Session`] lives as long as the screen, so the score survives board
//! resets but starts from zero on each visit from the menu.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use tictac_engine::{Coord, Outcome, Player, Session};
use tracing::{debug, info, instrument};

use crate::feedback::{Flicker, FlickerSchedule};
use crate::tui::board::{BoardView, draw_board};
use crate::tui::input::{digit_to_coord, move_cursor};
use crate::tui::screen::{Screen, ScreenContext, ScreenTransition};
use crate::tui::theme::SymbolSet;

/// State for the game screen.
#[derive(Debug, Getters)]
pub struct GameScreen {
    session: Session,
    cursor: Coord,
    flicker: Option<Flicker>,
    schedule: FlickerSchedule,
    now: Instant,
}

impl GameScreen {
    /// Starts a fresh session whose winning lines flicker on `schedule`.
    #[instrument]
    pub fn new(schedule: FlickerSchedule) -> Self {
        debug!("Initializing GameScreen");
        Self {
            session: Session::new(),
            cursor: Coord::ALL[4],
            flicker: None,
            schedule,
            now: Instant::now(),
        }
    }

    /// Plays the current player's mark at `coord`.
    ///
    /// Rejected moves change nothing on screen and make no sound.
    #[instrument(skip(self, ctx))]
    fn place(&mut self, coord: Coord, ctx: &mut ScreenContext) {
        let sound = *ctx.preferences().sound_enabled();
        match self.session.play(coord.row(), coord.col()) {
            Ok(report) => {
                ctx.feedback.on_move(&report, sound);
                if let Some(line) = report.outcome.winning_line() {
                    self.flicker = Some(self.schedule.start(line, Instant::now()));
                }
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
            }
        }
    }

    #[instrument(skip(self))]
    fn reset_board(&mut self) {
        info!("Board reset");
        self.session.reset_board();
        self.flicker = None;
    }

    #[instrument(skip(self))]
    fn reset_score(&mut self) {
        info!("Score reset");
        self.session.reset_score();
    }

    /// Status line text.
    pub fn status(&self, symbols: SymbolSet) -> String {
        let game = self.session.game();
        match game.outcome() {
            Outcome::Win { player, .. } => format!("Player {} wins!", symbols.symbol(*player)),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!(
                "Player {} to move",
                symbols.symbol(game.current_player())
            ),
        }
    }

    /// Scoreboard text.
    pub fn scoreboard(&self, symbols: SymbolSet) -> String {
        let score = self.session.score();
        format!(
            "Player {}: {}    Player {}: {}",
            symbols.symbol(Player::X),
            score.wins(Player::X),
            symbols.symbol(Player::O),
            score.wins(Player::O),
        )
    }

    fn board_view(&self) -> BoardView {
        let game = self.session.game();
        let highlight = game.outcome().winning_line().filter(|_| {
            self.flicker
                .as_ref()
                .is_none_or(|flicker| flicker.is_visible(self.now))
        });
        BoardView {
            cursor: (!game.is_terminal()).then_some(self.cursor),
            highlight,
        }
    }
}

impl Screen for GameScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, ctx: &ScreenContext) {
        let theme = ctx.theme();
        let symbols = ctx.symbols();
        let area = frame.area();
        frame.render_widget(Block::default().style(theme.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let scoreboard = Paragraph::new(self.scoreboard(symbols))
            .style(theme.title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Score"));
        frame.render_widget(scoreboard, chunks[0]);

        draw_board(
            frame,
            chunks[1],
            self.session.game().board(),
            self.board_view(),
            &theme,
            symbols,
        );

        let status = Paragraph::new(self.status(symbols))
            .style(Style::default().fg(theme.accent))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new(
            "Arrows: Move | Enter: Place | 1-9: Place | r: New board | s: Reset score | Esc: Menu",
        )
        .style(theme.help_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor, ctx),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(coord) = digit_to_coord(c) {
                    self.cursor = coord;
                    self.place(coord, ctx);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset_board(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.reset_score(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Leaving game screen");
                return ScreenTransition::GoToMainMenu;
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self, now: Instant) {
        self.now = now;
        if self.flicker.is_some_and(|flicker| flicker.is_finished(now)) {
            self.flicker = None;
        }
    }
}
