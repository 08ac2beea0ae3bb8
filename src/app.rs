//! The single-screen timer application.
//!
//! One screen, three states. While idle the minutes field has the keyboard
//! and `enter` commits a new countdown; while a countdown is armed the
//! field disappears and `space` and `r` drive pause, resume, and reset. The
//! view is a title, a progress bar draining toward empty, the `MM:SS`
//! readout, and a state-dependent help line.

use crate::countdown::{self, Mode};
use crate::help;
use crate::input;
use crate::key;
use crate::progress;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::{Color, Style};

const BAR_WIDTH: i32 = 40;

/// Key bindings for every screen state.
///
/// Pause and resume share the space key; keeping them as separate bindings
/// lets the help line describe the one that currently applies.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Commit the entered minutes and start counting down.
    pub start: key::Binding,
    /// Suspend a running countdown.
    pub pause: key::Binding,
    /// Continue a paused countdown.
    pub resume: key::Binding,
    /// Clear the countdown and return to the minutes field.
    pub reset: key::Binding,
    /// Leave the application.
    pub quit: key::Binding,
    /// Leave the application from the minutes field, where printable keys
    /// are taken as input.
    pub quit_idle: key::Binding,
    /// Leave the application regardless of state.
    pub force_quit: key::Binding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            start: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "start"),
            pause: key::Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "pause"),
            resume: key::Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "resume"),
            reset: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            quit: key::Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc]).with_help("q", "quit"),
            quit_idle: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "quit"),
            force_quit: key::Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "quit"),
        }
    }
}

/// The timer screen.
pub struct App {
    /// The countdown session.
    pub countdown: countdown::Model,
    /// The minutes entry field, shown while idle.
    pub input: input::Model,
    /// The progress bar.
    pub progress: progress::Model,
    /// The help line at the bottom of the screen.
    pub help: help::Model,
    /// The key bindings.
    pub keys: KeyBindings,

    title_style: Style,
    clock_style: Style,
    paused_style: Style,
}

impl App {
    /// Creates the screen in its idle state with the minutes field focused.
    pub fn new() -> Self {
        let mut input = input::new();
        input.placeholder = "Enter minutes".to_string();
        input.width = 18;
        input.prompt_style = Style::new().foreground(Color::from("#6366F1"));
        let _ = input.focus();

        let progress = progress::new(&[
            progress::with_default_gradient(),
            progress::with_width(BAR_WIDTH),
            progress::without_percentage(),
        ]);

        Self {
            countdown: countdown::Model::new(),
            input,
            progress,
            help: help::Model::new(),
            keys: KeyBindings::default(),
            title_style: Style::new().bold(true).foreground(Color::from("#6366F1")),
            clock_style: Style::new().bold(true),
            paused_style: Style::new().faint(true).italic(true),
        }
    }

    fn on_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keys.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        match self.countdown.mode() {
            Mode::Idle => {
                if self.keys.start.matches(key_msg) {
                    return self.commit_start();
                }
                if self.keys.quit_idle.matches(key_msg) {
                    return Some(bubbletea_rs::quit());
                }
                // Everything else belongs to the minutes field.
                self.input.handle_key(key_msg)
            }
            Mode::Running | Mode::Paused => {
                if self.keys.quit.matches(key_msg) {
                    return Some(bubbletea_rs::quit());
                }
                if self.keys.pause.matches(key_msg) {
                    return Some(self.countdown.toggle());
                }
                if self.keys.reset.matches(key_msg) {
                    self.countdown.reset();
                    self.input.reset();
                    let _ = self.input.focus();
                    return None;
                }
                None
            }
        }
    }

    /// Parses the minutes field and arms the countdown.
    ///
    /// A value that fails to parse or is not strictly positive leaves the
    /// field untouched so it can be corrected; nothing is reported. On
    /// success the field is cleared and the first tick is scheduled.
    fn commit_start(&mut self) -> Option<Cmd> {
        let seconds = match countdown::parse_minutes(&self.input.value()) {
            Some(seconds) => seconds,
            None => return None,
        };

        let cmd = self.countdown.arm(seconds);
        self.input.reset();
        if cmd.is_some() {
            self.input.blur();
        }
        cmd
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        (App::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.progress.width = (size.width as i32 - 4).clamp(10, BAR_WIDTH);
            self.help.width = size.width as usize;
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.on_key(key_msg);
        }

        if let Some(done) = msg.downcast_ref::<countdown::CompletedMsg>() {
            if done.id == self.countdown.id() {
                // Natural completion: hand the keyboard back to the field.
                let _ = self.input.focus();
            }
            return None;
        }

        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        let mut sections = Vec::new();

        sections.push(self.title_style.render("Minimal Timer"));
        sections.push(self.progress.view_as(self.countdown.fraction()));
        sections.push(self.clock_style.render(&self.countdown.view()));

        match self.countdown.mode() {
            Mode::Idle => sections.push(self.input.view()),
            Mode::Paused => sections.push(self.paused_style.render("paused")),
            Mode::Running => {}
        }

        sections.push(self.help.view(self));

        format!("\n{}\n", sections.join("\n\n"))
    }
}

impl help::KeyMap for App {
    fn short_help(&self) -> Vec<&key::Binding> {
        match self.countdown.mode() {
            Mode::Idle => vec![&self.keys.start, &self.keys.quit_idle],
            Mode::Running => vec![&self.keys.pause, &self.keys.reset, &self.keys.quit],
            Mode::Paused => vec![&self.keys.resume, &self.keys.reset, &self.keys.quit],
        }
    }
}
