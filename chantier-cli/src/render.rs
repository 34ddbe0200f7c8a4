//! Terminal rendering for chantier-core types.
//!
//! Extension traits that add colored output using owo_colors; the hex
//! palette from the core maps straight to truecolor.

use owo_colors::OwoColorize;

use chantier_core::{BorderStyle, Project, TaskPeriod, TaskStatus, palette};

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TaskStatus {
    fn render(&self) -> String {
        let (r, g, b) = hex_to_rgb(palette::status_color(*self));
        format!("{} {}", "●".truecolor(r, g, b), self.label())
    }
}

impl Render for Project {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            format!("#{}", self.id).dimmed(),
            self.title.bold(),
            format!("({})", self.author).dimmed()
        )
    }
}

impl Render for TaskPeriod {
    fn render(&self) -> String {
        let (r, g, b) = hex_to_rgb(self.color);
        format!(
            "{} {}",
            glyph(self.border_style()).truecolor(r, g, b),
            self.display_text
        )
    }
}

/// Period segment glyph per border style.
fn glyph(style: BorderStyle) -> &'static str {
    match style {
        BorderStyle::FullyRounded => "●",
        BorderStyle::RoundedLeft => "▶",
        BorderStyle::RoundedRight => "◀",
        BorderStyle::Square => "─",
    }
}

/// Parse a `#RRGGBB` palette entry into its RGB components.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let channel = |range| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };

    (channel(0..2), channel(2..4), channel(4..6))
}
