#![warn(missing_docs)]

//! # minimal-timer
//!
//! A single-screen countdown timer for the terminal, built on
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs). Enter a
//! number of minutes, start the countdown, pause and resume it, reset it.
//! The screen shows a draining progress bar and a zero-padded `MM:SS`
//! readout.
//!
//! Each piece of the screen is its own component following the Elm
//! Architecture pattern (`init`/`update`/`view`), so the parts can be reused
//! or tested in isolation:
//!
//! - [`countdown`]: the one-second countdown session and its tick schedule
//! - [`input`]: the minutes entry field
//! - [`progress`]: the progress bar renderer
//! - [`help`] and [`key`]: key bindings and the state-dependent help line
//! - [`app`]: the screen that wires the pieces together
//!
//! ## Running
//!
//! The binary target starts the full screen:
//!
//! ```text
//! cargo run
//! ```
//!
//! ## Using the pieces
//!
//! ```rust
//! use minimal_timer::countdown::{format_clock, parse_minutes, Model};
//!
//! let mut countdown = Model::new();
//! if let Some(seconds) = parse_minutes("1.5") {
//!     let _cmd = countdown.arm(seconds);
//! }
//! assert_eq!(format_clock(countdown.remaining()), "01:30");
//! ```

pub mod app;
pub mod countdown;
pub mod help;
pub mod input;
pub mod key;
pub mod progress;

use bubbletea_rs::Cmd;

/// Focus management for components that accept keyboard input.
///
/// Only the focused component receives key events; the owning screen decides
/// which component that is and moves focus as its state changes.
pub trait Component {
    /// Gives the component keyboard focus. May return a command for
    /// follow-up work such as starting a cursor timer.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use app::App;
pub use countdown::{
    format_clock, parse_minutes, CompletedMsg as CountdownCompletedMsg, Mode,
    Model as Countdown, StartStopMsg as CountdownStartStopMsg, TickMsg as CountdownTickMsg,
};
pub use help::{KeyMap, Model as HelpModel};
pub use input::{new as input_new, Model as MinutesInput};
pub use key::Binding;
pub use progress::{new as progress_new, Model as Progress};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::app::App;
    pub use crate::countdown::{
        format_clock, parse_minutes, CompletedMsg as CountdownCompletedMsg, Mode,
        Model as Countdown, StartStopMsg as CountdownStartStopMsg, TickMsg as CountdownTickMsg,
    };
    pub use crate::help::{KeyMap, Model as HelpModel};
    pub use crate::input::{new as input_new, Model as MinutesInput};
    pub use crate::key::Binding;
    pub use crate::progress::{new as progress_new, Model as Progress};
    pub use crate::Component;
}
