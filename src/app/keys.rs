//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Screen, Tab};

impl App {
    /// Route a key press. Releases and repeats from enhanced keyboards are
    /// ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // Alert is modal
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.alert = None;
            }
            return;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Main => match key.code {
                KeyCode::Tab => self.next_tab(),
                KeyCode::BackTab => self.prev_tab(),
                _ if self.tab == Tab::Contribute => self.handle_contribute_key(key),
                _ => self.handle_read_key(key),
            },
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.focus = self.login.focus.toggle();
            }
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => self.login.backspace(),
            KeyCode::Char(c) if !has_command_modifier(key.modifiers) => {
                self.login.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_contribute_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => self.contribute.focus = self.contribute.focus.next(),
            KeyCode::Up => self.contribute.focus = self.contribute.focus.prev(),
            KeyCode::Enter => self.submit_contribution(),
            KeyCode::Backspace => self.contribute.backspace(),
            KeyCode::Char(c) if !has_command_modifier(key.modifiers) => {
                self.contribute.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_read_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('r') => {
                self.refresh_current();
            }
            KeyCode::Char(c) => {
                if let Some(tab) = Tab::from_digit(c) {
                    self.select_tab(tab);
                }
            }
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            _ => {}
        }
    }
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}
