use crate::core::config::Theme;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::{Style, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Value,
    Error,
    Subtle,
}

/// Theme-dependent colours for all terminal output.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    theme: Theme,
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn accent(&self) -> Style {
        match self.theme {
            Theme::Dark => Style::new().green(),
            Theme::Light => Style::new().blue(),
        }
    }

    fn table_accent(&self) -> Color {
        match self.theme {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::DarkBlue,
        }
    }

    /// Applies a consistent style to a string.
    pub fn style_text(&self, text: &str, style_type: StyleType) -> String {
        let styled = match style_type {
            StyleType::Title => style(text).bold().underlined(),
            StyleType::Label => style(text).bold(),
            StyleType::Value => self.accent().bold().apply_to(text),
            StyleType::Error => style(text).red(),
            StyleType::Subtle => style(text).dim(),
        };
        styled.to_string()
    }

    /// Colour used for the trend line.
    pub fn style_chart_line(&self, line: &str) -> String {
        self.accent().apply_to(line).to_string()
    }

    /// Signed percentage, green when the rate went up and red when it fell.
    pub fn style_change(&self, change: f64) -> String {
        let text = format!("{change:+.2}%");
        if change >= 0.0 {
            style(text).green().to_string()
        } else {
            style(text).red().to_string()
        }
    }

    /// Creates a styled header cell for a table.
    pub fn header_cell(&self, text: &str) -> Cell {
        Cell::new(text)
            .fg(self.table_accent())
            .add_attribute(Attribute::Bold)
    }
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn right_aligned_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Spinner shown while a lookup is in flight. Draws nothing when stderr is
/// not a terminal.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Width of stdout in columns, 80 when it is not a terminal.
pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80)
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    println!("\n{}", "─".repeat(terminal_width()));
}

/// Formats an amount with two decimals and thousands separators, e.g. `1,234.50`.
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// Formats a per-unit rate. Very small rates such as IDR get extra precision.
pub fn format_rate(rate: f64) -> String {
    if rate.abs() < 0.01 {
        format!("{rate:.6}")
    } else {
        format!("{rate:.4}")
    }
}
