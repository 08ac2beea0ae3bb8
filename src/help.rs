//! Single-line help view generated from key bindings.
//!
//! The help line renders the currently relevant bindings as
//! `key description` pairs joined by bullets, truncating with an ellipsis
//! when a width limit is set. Which bindings are relevant is the owning
//! model's decision, expressed through the [`KeyMap`] trait; a screen with
//! several states returns a different set per state and the help line
//! follows along.

use crate::key;
use bubbletea_rs::{Cmd, Msg};
use lipgloss_extras::lipgloss::{self, AdaptiveColor, Style};

/// Provides the key bindings the help view should render.
pub trait KeyMap {
    /// The bindings relevant right now, in display order.
    fn short_help(&self) -> Vec<&key::Binding>;
}

/// Styling for the pieces of the help line.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the key label.
    pub short_key: Style,
    /// Style for the action description.
    pub short_desc: Style,
    /// Style for the separator between items.
    pub short_separator: Style,
    /// Style for the truncation ellipsis.
    pub ellipsis: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            short_key: key_style,
            short_desc: desc_style,
            short_separator: sep_style.clone(),
            ellipsis: sep_style,
        }
    }
}

/// The help line model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Maximum width of the help line in characters. Zero means unlimited.
    pub width: usize,
    /// Separator between items. Default is `" • "`.
    pub short_separator: String,
    /// Marker shown when items are dropped for width. Default is `"…"`.
    pub ellipsis: String,
    /// Styling for keys, descriptions, and separators.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            width: 0,
            short_separator: " • ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help line with default separators and adaptive styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width of the rendered line.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Messages are ignored; the help line is a pure view component.
    pub fn update(self, _msg: Msg) -> (Self, Option<Cmd>) {
        (self, None)
    }

    /// Renders the help line for the given key map.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        self.short_help_view(keymap.short_help())
    }

    /// Renders a list of bindings as a single help line.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        if bindings.is_empty() {
            return String::new();
        }

        let mut builder = String::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        for kb in bindings {
            let sep = if total_width > 0 { separator.as_str() } else { "" };

            let key_part = self.styles.short_key.clone().inline(true).render(&kb.help);
            let desc_part = self
                .styles
                .short_desc
                .clone()
                .inline(true)
                .render(&kb.description);
            let item_str = format!("{}{} {}", sep, key_part, desc_part);
            let item_width = lipgloss::width_visible(&item_str);

            // Stop at the width limit, marking the cut if the marker fits.
            if self.width > 0 && total_width + item_width > self.width {
                let tail = format!(" {}", self.ellipsis);
                if total_width + lipgloss::width_visible(&tail) <= self.width {
                    builder.push_str(&self.styles.ellipsis.clone().inline(true).render(&tail));
                }
                break;
            }

            total_width += item_width;
            builder.push_str(&item_str);
        }
        builder
    }
}
