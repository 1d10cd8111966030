//! Settings screen: toggles each preference through the store.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use crate::settings::{SettingKey, SettingValue, SettingsStore};
use crate::tui::screen::{Screen, ScreenContext, ScreenTransition};

/// State for the settings screen.
#[derive(Debug)]
pub struct SettingsScreen {
    keys: Vec<SettingKey>,
    list_state: ListState,
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsScreen {
    /// Creates the screen with the first setting selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SettingsScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            keys: SettingKey::iter().collect(),
            list_state,
        }
    }

    /// Setting under the cursor.
    pub fn selected_key(&self) -> SettingKey {
        let idx = self.list_state.selected().unwrap_or(0);
        self.keys[idx.min(self.keys.len() - 1)]
    }

    fn move_selection(&mut self, forward: bool) {
        let count = self.keys.len();
        let i = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (i + 1) % count
        } else {
            (i + count - 1) % count
        };
        self.list_state.select(Some(next));
    }

    /// Flips the selected setting. Non-boolean values are left alone.
    #[instrument(skip(self, store))]
    fn toggle_selected(&self, store: &SettingsStore) {
        let key = self.selected_key();
        match store.get_known(key) {
            SettingValue::Bool(current) => {
                store.set(key.as_str(), !current);
                info!(key = key.as_str(), enabled = !current, "Toggled setting");
            }
            other => warn!(key = key.as_str(), value = %other, "Setting is not a switch"),
        }
    }
}

impl Screen for SettingsScreen {
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

        let title = Paragraph::new("Settings")
            .style(theme.title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .keys
            .iter()
            .map(|key| {
                let state = match ctx.settings.get_known(*key) {
                    SettingValue::Bool(true) => "On".to_string(),
                    SettingValue::Bool(false) => "Off".to_string(),
                    other => other.to_string(),
                };
                ListItem::new(format!("{:<24}[ {} ]", key.label(), state))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Preferences"))
            .highlight_style(theme.selected_style())
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | ←→ / Enter: Toggle | Esc: Back")
            .style(theme.help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up => self.move_selection(false),
            KeyCode::Down => self.move_selection(true),
            KeyCode::Enter | KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.toggle_selected(&ctx.settings);
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Leaving settings screen");
                return ScreenTransition::GoToMainMenu;
            }
            _ => {}
        }
        ScreenTransition::Stay
    }
}
