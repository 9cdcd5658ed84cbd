use crossterm::event::KeyCode;

/// Controlled text input. Every edit reports the new value.
#[derive(Debug, Default)]
pub struct SearchBox {
    value: String,
    focused: bool,
}

/// What a key press did to the search box.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// The text changed; carries the new value.
    Changed(String),
    /// Focus left the box; the text is unchanged.
    Blurred,
    Ignored,
}

impl SearchBox {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn handle_key(&mut self, code: KeyCode) -> SearchEvent {
        if !self.focused {
            return SearchEvent::Ignored;
        }

        match code {
            KeyCode::Char(c) => {
                self.value.push(c);
                SearchEvent::Changed(self.value.clone())
            }
            KeyCode::Backspace => {
                if self.value.pop().is_some() {
                    SearchEvent::Changed(self.value.clone())
                } else {
                    SearchEvent::Ignored
                }
            }
            KeyCode::Enter | KeyCode::Down => {
                self.focused = false;
                SearchEvent::Blurred
            }
            KeyCode::Esc => {
                self.focused = false;
                if self.value.is_empty() {
                    SearchEvent::Blurred
                } else {
                    self.value.clear();
                    SearchEvent::Changed(String::new())
                }
            }
            _ => SearchEvent::Ignored,
        }
    }
}
