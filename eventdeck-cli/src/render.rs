//! Terminal rendering for event records.
//!
//! Extension trait adding colored output to eventdeck-core types, plus the
//! spinner shown while a store request is pending.

use chrono::{DateTime, Local, Utc};
use eventdeck_core::Event;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Extension trait for rendering with colors.
pub trait Render {
    /// One listing row.
    fn render(&self) -> String;

    /// The full detail view.
    fn render_detail(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let tags = self
            .categories
            .iter()
            .map(|c| c.blue().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "{}  {}  {} {} {}",
            format_instant(&self.start_time).dimmed(),
            self.title.bold(),
            "@".dimmed(),
            self.location,
            tags,
        )
    }

    fn render_detail(&self) -> String {
        let mut lines = Vec::new();

        lines.push(self.title.bold().to_string());
        lines.push(format!("{} {}", "Organized by".dimmed(), self.organizer));
        lines.push(String::new());
        lines.push(self.description.clone());
        lines.push(String::new());
        lines.push(format!("{} {}", "Start:".dimmed(), format_instant(&self.start_time)));
        lines.push(format!("{} {}", "End:".dimmed(), format_instant(&self.end_time)));
        lines.push(format!("{} {}", "Location:".dimmed(), self.location));

        let tags = self
            .categories
            .iter()
            .map(|c| c.blue().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("{} {}", "Categories:".dimmed(), tags));

        if let Some(image) = &self.image {
            lines.push(format!("{} {}", "Image:".dimmed(), image.dimmed()));
        }
        if let Some(image) = &self.organizer_image {
            lines.push(format!("{} {}", "Organizer image:".dimmed(), image.dimmed()));
        }

        lines.push(format!("{} {}", "Id:".dimmed(), self.id.dimmed()));

        lines.join("\n")
    }
}

/// Render an instant in the viewer's local timezone.
fn format_instant(instant: &DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%a %b %-d %Y %H:%M")
        .to_string()
}

/// Spinner shown while a store request is in flight.
pub fn spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
