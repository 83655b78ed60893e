use anyhow::{Context, Result};
use eventdeck_core::filter;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render;

/// Print every category in use, in first-appearance order. This is the
/// set a listing can be filtered by.
pub async fn run(app: &App) -> Result<()> {
    let spinner = render::spinner("Fetching events...".to_string());
    let result = app.cache.events(&app.client).await;
    spinner.finish_and_clear();

    let events =
        result.context("The event list could not be loaded. Run the command again to retry.")?;
    let categories = filter::all_categories(&events);

    if categories.is_empty() {
        println!("{}", "No categories yet.".dimmed());
        return Ok(());
    }

    for category in categories {
        println!("{}", category.blue());
    }

    Ok(())
}
