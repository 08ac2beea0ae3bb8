//! Progress bar for the countdown display.
//!
//! A stateless horizontal bar rendered at an exact fraction. The countdown
//! advances in whole-second steps, so the bar has no animation machinery;
//! every render is a pure function of the fraction passed to
//! [`view_as`](Model::view_as).
//!
//! # Basic Usage
//!
//! ```rust
//! use minimal_timer::progress::{new, with_width, without_percentage};
//!
//! let bar = new(&[with_width(20), without_percentage()]);
//! let view = bar.view_as(0.5);
//! assert!(!view.is_empty());
//! ```

use lipgloss_extras::lipgloss::{self, blending::blend_1d, Color, Style};

const DEFAULT_WIDTH: i32 = 40;
const DEFAULT_FULL_COLOR: &str = "#6366F1";
const DEFAULT_EMPTY_COLOR: &str = "#606060";

// Default gradient endpoints, indigo into purple.
const DEFAULT_RAMP_A: &str = "#6366F1";
const DEFAULT_RAMP_B: &str = "#A855F7";

/// Configuration options applied when constructing a bar with [`new`].
pub enum ProgressOption {
    /// Blend the filled portion between the two default gradient colors.
    WithDefaultGradient,
    /// Blend the filled portion between two custom colors.
    WithGradient(String, String),
    /// Fill with a single solid color instead of a gradient.
    WithSolidFill(String),
    /// Characters used for the filled and empty portions.
    WithFillCharacters(char, char),
    /// Hide the numeric percentage suffix.
    WithoutPercentage,
    /// Total width of the bar in characters, percentage included.
    WithWidth(i32),
}

impl ProgressOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithDefaultGradient => {
                m.set_ramp(DEFAULT_RAMP_A.to_string(), DEFAULT_RAMP_B.to_string());
            }
            ProgressOption::WithGradient(color_a, color_b) => {
                m.set_ramp(color_a.clone(), color_b.clone());
            }
            ProgressOption::WithSolidFill(color) => {
                m.full_color = color.clone();
                m.use_ramp = false;
            }
            ProgressOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            ProgressOption::WithoutPercentage => {
                m.show_percentage = false;
            }
            ProgressOption::WithWidth(width) => {
                m.width = *width;
            }
        }
    }
}

/// Uses the default indigo-to-purple gradient for the filled portion.
pub fn with_default_gradient() -> ProgressOption {
    ProgressOption::WithDefaultGradient
}

/// Blends the filled portion between two custom colors.
pub fn with_gradient(color_a: String, color_b: String) -> ProgressOption {
    ProgressOption::WithGradient(color_a, color_b)
}

/// Fills the bar with a single solid color.
pub fn with_solid_fill(color: String) -> ProgressOption {
    ProgressOption::WithSolidFill(color)
}

/// Sets the characters drawn for filled and empty sections.
pub fn with_fill_characters(full: char, empty: char) -> ProgressOption {
    ProgressOption::WithFillCharacters(full, empty)
}

/// Hides the numeric percentage suffix.
pub fn without_percentage() -> ProgressOption {
    ProgressOption::WithoutPercentage
}

/// Sets the total width of the bar in characters.
pub fn with_width(w: i32) -> ProgressOption {
    ProgressOption::WithWidth(w)
}

/// The progress bar model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Total width of the bar, including the percentage suffix if shown.
    pub width: i32,

    /// Character for filled sections.
    pub full: char,
    /// Color of the filled portion when rendering a solid fill.
    pub full_color: String,

    /// Character for empty sections.
    pub empty: char,
    /// Color of the empty portion.
    pub empty_color: String,

    /// Whether the numeric percentage suffix is rendered.
    pub show_percentage: bool,
    /// Style applied to the percentage text.
    pub percentage_style: Style,

    use_ramp: bool,
    ramp_color_a: String,
    ramp_color_b: String,
}

/// Creates a new progress bar, applying the given options over the defaults:
/// 40 characters wide, `'█'` on `'░'`, solid indigo fill, percentage shown.
pub fn new(opts: &[ProgressOption]) -> Model {
    let mut m = Model {
        width: DEFAULT_WIDTH,
        full: '█',
        full_color: DEFAULT_FULL_COLOR.to_string(),
        empty: '░',
        empty_color: DEFAULT_EMPTY_COLOR.to_string(),
        show_percentage: true,
        percentage_style: Style::new(),
        use_ramp: false,
        ramp_color_a: String::new(),
        ramp_color_b: String::new(),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Renders the bar at an exact fraction in `0.0..=1.0`.
    ///
    /// Values outside the range are clamped for display.
    pub fn view_as(&self, percent: f64) -> String {
        let percent = percent.clamp(0.0, 1.0);
        let percent_view = self.percentage_view(percent);
        let percent_width = lipgloss::width_visible(&percent_view) as i32;
        let bar_view = self.bar_view(percent, percent_width);

        format!("{}{}", bar_view, percent_view)
    }

    fn bar_view(&self, percent: f64, text_width: i32) -> String {
        let tw = std::cmp::max(0, self.width - text_width); // total width
        let fw = std::cmp::max(0, std::cmp::min(tw, ((tw as f64) * percent).round() as i32)); // filled width

        let mut result = String::new();

        if self.use_ramp {
            let grad_len = std::cmp::max(2, tw) as usize;
            let start = Color::from(self.ramp_color_a.as_str());
            let end = Color::from(self.ramp_color_b.as_str());
            let gradient_colors = blend_1d(grad_len, vec![start, end]);

            for i in 0..fw as usize {
                let color_idx = std::cmp::min(i, grad_len - 1);
                let styled = Style::new()
                    .foreground(gradient_colors[color_idx].clone())
                    .render(&self.full.to_string());
                result.push_str(&styled);
            }
        } else {
            let styled = Style::new()
                .foreground(Color::from(self.full_color.as_str()))
                .render(&self.full.to_string());
            result.push_str(&styled.repeat(fw as usize));
        }

        let empty_styled = Style::new()
            .foreground(Color::from(self.empty_color.as_str()))
            .render(&self.empty.to_string());
        let n = std::cmp::max(0, tw - fw);
        result.push_str(&empty_styled.repeat(n as usize));

        result
    }

    fn percentage_view(&self, percent: f64) -> String {
        if !self.show_percentage {
            return String::new();
        }
        let percentage = format!(" {:3.0}%", percent * 100.0);
        self.percentage_style.render(&percentage)
    }

    fn set_ramp(&mut self, color_a: String, color_b: String) {
        self.use_ramp = true;
        self.ramp_color_a = color_a;
        self.ramp_color_b = color_b;
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}
