//! Colours and mark symbols derived from preferences.

use ratatui::style::{Color, Modifier, Style};
use tictac_engine::{Cell, Player};

use crate::settings::Preferences;

/// How marks are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolSet {
    /// X and O.
    #[default]
    Classic,
    /// P and I.
    Alternate,
}

impl SymbolSet {
    /// Picks the set named by `alternate_symbols`.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        if *prefs.alternate_symbols() {
            SymbolSet::Alternate
        } else {
            SymbolSet::Classic
        }
    }

    /// Symbol shown for `player`.
    pub fn symbol(self, player: Player) -> &'static str {
        match (self, player) {
            (SymbolSet::Classic, Player::X) => "X",
            (SymbolSet::Classic, Player::O) => "O",
            (SymbolSet::Alternate, Player::X) => "P",
            (SymbolSet::Alternate, Player::O) => "I",
        }
    }

    /// Symbol shown for `cell`, a blank for empty cells.
    pub fn cell(self, cell: Cell) -> &'static str {
        cell.mark().map_or(" ", |player| self.symbol(player))
    }
}

/// Palette for every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Body text.
    pub text: Color,
    /// Titles.
    pub title: Color,
    /// Selected menu entries and the status line.
    pub accent: Color,
    /// Help lines and grid lines.
    pub muted: Color,
    /// Player X marks.
    pub player_x: Color,
    /// Player O marks.
    pub player_o: Color,
    /// Winning line highlight.
    pub highlight: Color,
}

impl Theme {
    /// Light palette.
    pub const LIGHT: Theme = Theme {
        background: Color::Reset,
        text: Color::Reset,
        title: Color::Cyan,
        accent: Color::Yellow,
        muted: Color::DarkGray,
        player_x: Color::Blue,
        player_o: Color::Red,
        highlight: Color::Green,
    };

    /// Dark palette.
    pub const DARK: Theme = Theme {
        background: Color::Black,
        text: Color::Gray,
        title: Color::LightCyan,
        accent: Color::LightYellow,
        muted: Color::DarkGray,
        player_x: Color::LightBlue,
        player_o: Color::LightMagenta,
        highlight: Color::LightGreen,
    };

    /// Picks the palette named by `dark_mode`.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        if *prefs.dark_mode() {
            Theme::DARK
        } else {
            Theme::LIGHT
        }
    }

    /// Base style for screen blocks.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for titles.
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Style for highlighted list entries.
    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for help lines.
    pub fn help_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Colour for `player`'s marks.
    pub fn player_color(&self, player: Player) -> Color {
        match player {
            Player::X => self.player_x,
            Player::O => self.player_o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{SettingKey, SettingsStore};

    #[test]
    fn test_symbols_follow_preference() {
        let store = SettingsStore::in_memory();
        let classic = SymbolSet::from_preferences(&Preferences::load(&store));
        assert_eq!(classic.symbol(Player::X), "X");
        assert_eq!(classic.symbol(Player::O), "O");

        store.set(SettingKey::AlternateSymbols.as_str(), true);
        let alternate = SymbolSet::from_preferences(&Preferences::load(&store));
        assert_eq!(alternate.symbol(Player::X), "P");
        assert_eq!(alternate.symbol(Player::O), "I");
        assert_eq!(alternate.cell(Cell::Empty), " ");
    }

    #[test]
    fn test_theme_follows_dark_mode() {
        let store = SettingsStore::in_memory();
        assert_eq!(Theme::from_preferences(&Preferences::load(&store)), Theme::LIGHT);
        store.set(SettingKey::DarkMode.as_str(), true);
        assert_eq!(Theme::from_preferences(&Preferences::load(&store)), Theme::DARK);
    }
}
