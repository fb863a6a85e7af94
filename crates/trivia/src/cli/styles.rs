//! Styles for the handful of status lines the CLI prints. `console` drops the
//! colors on its own when stdout is not a terminal.

use console::Style;

pub fn success() -> Style {
    Style::new().green().bold()
}

pub fn muted() -> Style {
    Style::new().dim()
}

pub fn highlight() -> Style {
    Style::new().cyan()
}
