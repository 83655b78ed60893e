pub mod add;
pub mod categories;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;

use clap::Args;

/// Event fields shared by `add` and `edit`.
///
/// `add` prompts for anything required that was not passed as a flag;
/// `edit` keeps the current value instead (and prompts for everything,
/// prefilled, when no flags are given at all).
#[derive(Args, Debug, Default)]
pub struct EventFields {
    /// Event title
    #[arg(long)]
    pub title: Option<String>,

    /// What the event is about
    #[arg(long)]
    pub description: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Start date/time (e.g. "2025-03-20T18:00")
    #[arg(long)]
    pub start: Option<String>,

    /// End date/time, strictly after the start
    #[arg(long)]
    pub end: Option<String>,

    /// Where the event takes place
    #[arg(long)]
    pub location: Option<String>,

    /// Comma-separated categories (e.g. "Music, Arts")
    #[arg(long)]
    pub categories: Option<String>,

    /// Organizer name
    #[arg(long)]
    pub organizer: Option<String>,

    /// Organizer image URL
    #[arg(long)]
    pub organizer_image: Option<String>,
}

impl EventFields {
    /// True when no field flag was given at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.location.is_none()
            && self.categories.is_none()
            && self.organizer.is_none()
            && self.organizer_image.is_none()
    }
}
