//! Single-line entry field for the minutes value.
//!
//! A pared-down text input: printable characters append, backspace deletes,
//! and the raw text is handed back verbatim when the countdown is committed.
//! No validation happens at entry time; rejecting a bad value is the
//! committer's job, and the field keeps its contents so the value can be
//! corrected in place.

use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::Style;
use unicode_width::UnicodeWidthStr;

/// The minutes entry field model.
pub struct Model {
    /// Prompt rendered before the text.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style for typed text.
    pub text_style: Style,
    /// Placeholder shown while the field is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style for the block cursor.
    pub cursor_style: Style,
    /// Maximum number of characters accepted. Zero means no limit.
    pub char_limit: i32,
    /// Minimum rendered width of the field. Zero disables padding.
    pub width: i32,

    value: Vec<char>,
    focus: bool,
}

/// Creates an unfocused, empty field with default styling.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().faint(true),
        cursor_style: Style::new().reverse(true),
        char_limit: 0,
        width: 0,
        value: Vec::new(),
        focus: false,
    }
}

impl Model {
    /// Returns the current contents of the field.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the contents of the field, honoring the character limit.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        if self.char_limit > 0 {
            self.value.truncate(self.char_limit as usize);
        }
    }

    /// Clears the field.
    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// Handles a single key event. Only printable characters and backspace
    /// do anything, and only while the field has focus.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        match key_msg.key {
            KeyCode::Char(c)
                if !key_msg
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if self.char_limit == 0 || (self.value.len() as i32) < self.char_limit {
                    self.value.push(c);
                }
            }
            KeyCode::Backspace => {
                self.value.pop();
            }
            _ => {}
        }
        None
    }

    /// Processes messages, forwarding key events to [`handle_key`](Model::handle_key).
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        None
    }

    /// Renders the field: prompt, text, and a block cursor while focused,
    /// or the placeholder when empty.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() && !self.placeholder.is_empty() {
            let mut v = String::new();
            if self.focus {
                let first = self.placeholder.chars().next().unwrap_or(' ');
                v.push_str(&self.cursor_style.render(&first.to_string()));
                let rest: String = self.placeholder.chars().skip(1).collect();
                v.push_str(&self.placeholder_style.render(&rest));
            } else {
                v.push_str(&self.placeholder_style.render(&self.placeholder));
            }
            return format!("{}{}", prompt, v);
        }

        let text: String = self.value.iter().collect();
        let mut v = self.text_style.render(&text);
        if self.focus {
            v.push_str(&self.cursor_style.render(" "));
        }

        if self.width > 0 {
            let used = text.width() + if self.focus { 1 } else { 0 };
            let padding = (self.width as usize).saturating_sub(used);
            v.push_str(&self.text_style.render(&" ".repeat(padding)));
        }

        format!("{}{}", prompt, v)
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
