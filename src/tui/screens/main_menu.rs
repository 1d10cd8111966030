//! Main menu: start a game, open settings, or quit.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenContext, ScreenTransition};

/// Menu options available in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    StartGame,
    Settings,
    Quit,
}

impl MenuOption {
    fn label(self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::Settings => "Settings",
            Self::Quit => "Quit",
        }
    }

    fn all() -> &'static [MenuOption] {
        &[Self::StartGame, Self::Settings, Self::Quit]
    }
}

/// State for the main menu.
#[derive(Debug)]
pub struct MainMenuScreen {
    list_state: ListState,
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenuScreen {
    /// Creates the menu with the first option selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MainMenuScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    /// Index of the selected option.
    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let options = MenuOption::all();
        options[self.selected().min(options.len() - 1)]
    }
}

impl Screen for MainMenuScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, ctx: &ScreenContext) {
        let theme = ctx.theme();
        let area = frame.area();
        frame.render_widget(Block::default().style(theme.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe")
            .style(theme.title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MenuOption::all()
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(theme.selected_style())
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(theme.help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut ScreenContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::StartGame => ScreenTransition::GoToGame,
                    MenuOption::Settings => ScreenTransition::GoToSettings,
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
