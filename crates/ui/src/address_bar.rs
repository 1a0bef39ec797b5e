//! Address bar component.

use crate::theme::{Themed, UiTheme, WidgetStyle};

/// Address bar.
pub struct AddressBar {
    /// Displayed text.
    text: String,
    /// Hint shown while the text is empty.
    placeholder: String,
    /// Is focused.
    focused: bool,
    /// Cursor position, in bytes.
    cursor: usize,
    /// Selection range.
    selection: Option<(usize, usize)>,
    /// Current colors.
    style: WidgetStyle,
}

impl AddressBar {
    /// Create a new address bar.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            placeholder: placeholder.into(),
            focused: false,
            cursor: 0,
            selection: None,
            style: UiTheme::default().address_bar_style(),
        }
    }

    /// Get the displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
        self.selection = None;
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Focus the address bar.
    pub fn focus(&mut self) {
        self.focused = true;
        self.cursor = self.text.len();
        self.selection = Some((0, self.text.len()));
    }

    /// Blur the address bar.
    pub fn blur(&mut self) {
        self.focused = false;
        self.selection = None;
    }

    /// Check if focused.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Get cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get selection.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Handle key input.
    pub fn on_key(&mut self, key: Key) -> Option<AddressBarAction> {
        match key {
            Key::Char(c) => {
                self.delete_selection();
                self.text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                None
            }
            Key::Backspace => {
                if !self.delete_selection() && self.cursor > 0 {
                    let previous = self.text[..self.cursor]
                        .chars()
                        .next_back()
                        .map_or(0, char::len_utf8);
                    self.cursor -= previous;
                    self.text.remove(self.cursor);
                }
                None
            }
            Key::Left => {
                if let Some(c) = self.text[..self.cursor].chars().next_back() {
                    self.cursor -= c.len_utf8();
                }
                self.selection = None;
                None
            }
            Key::Right => {
                if let Some(c) = self.text[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
                self.selection = None;
                None
            }
            Key::Enter => {
                self.blur();
                Some(AddressBarAction::Submit(self.text.clone()))
            }
            Key::Escape => {
                self.blur();
                Some(AddressBarAction::Cancel)
            }
        }
    }

    fn delete_selection(&mut self) -> bool {
        match self.selection.take() {
            Some((start, end)) if start < end => {
                self.text.replace_range(start..end, "");
                self.cursor = start;
                true
            }
            _ => false,
        }
    }
}

impl Themed for AddressBar {
    fn apply_theme(&mut self, theme: &UiTheme) {
        self.style = theme.address_bar_style();
    }

    fn style(&self) -> &WidgetStyle {
        &self.style
    }
}

/// Key input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Left,
    Right,
    Enter,
    Escape,
}

/// Address bar action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressBarAction {
    /// Return was pressed with this text.
    Submit(String),
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_bar_creation() {
        let bar = AddressBar::new("Enter search query or URL");
        assert!(!bar.is_focused());
        assert!(bar.text().is_empty());
        assert_eq!(bar.placeholder(), "Enter search query or URL");
    }

    #[test]
    fn test_focus_selects_all() {
        let mut bar = AddressBar::new("");
        bar.set_text("https://example.com");

        bar.focus();
        assert!(bar.is_focused());
        assert_eq!(bar.selection(), Some((0, 19)));
    }

    #[test]
    fn test_typing_replaces_selection() {
        let mut bar = AddressBar::new("");
        bar.set_text("https://example.com");
        bar.focus();

        bar.on_key(Key::Char('a'));
        bar.on_key(Key::Char('b'));
        bar.on_key(Key::Char('c'));

        assert_eq!(bar.text(), "abc");
        assert_eq!(bar.cursor(), 3);
    }

    #[test]
    fn test_backspace_and_cursor_moves() {
        let mut bar = AddressBar::new("");
        bar.set_text("héllo");

        bar.on_key(Key::Left);
        bar.on_key(Key::Left);
        bar.on_key(Key::Left);
        bar.on_key(Key::Backspace);
        assert_eq!(bar.text(), "hllo");

        bar.on_key(Key::Right);
        bar.on_key(Key::Char('!'));
        assert_eq!(bar.text(), "hl!lo");
    }

    #[test]
    fn test_enter_submits() {
        let mut bar = AddressBar::new("");
        bar.focus();
        bar.set_text("rust lang");

        let action = bar.on_key(Key::Enter);
        assert_eq!(action, Some(AddressBarAction::Submit("rust lang".to_string())));
        assert!(!bar.is_focused());
    }

    #[test]
    fn test_escape_cancels() {
        let mut bar = AddressBar::new("");
        bar.focus();

        let action = bar.on_key(Key::Escape);
        assert_eq!(action, Some(AddressBarAction::Cancel));
        assert!(!bar.is_focused());
    }
}
