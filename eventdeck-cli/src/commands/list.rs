use anyhow::{Context, Result};
use eventdeck_core::filter;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render::{self, Render};

pub async fn run(
    app: &App,
    search: Option<String>,
    categories: Vec<String>,
    json: bool,
) -> Result<()> {
    let spinner = render::spinner("Fetching events...".to_string());
    let result = app.cache.events(&app.client).await;
    spinner.finish_and_clear();

    let events =
        result.context("The event list could not be loaded. Run the command again to retry.")?;

    let term = search.as_deref().unwrap_or("");
    let visible = filter::visible_events(&events, term, &categories);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "No events yet.".dimmed());
        return Ok(());
    }

    if visible.is_empty() {
        println!("{}", "No events found matching your search.".dimmed());
        return Ok(());
    }

    for event in &visible {
        println!("{}", event.render());
    }

    if visible.len() != events.len() {
        println!();
        println!(
            "{}",
            format!("{} of {} events", visible.len(), events.len()).dimmed()
        );
    }

    Ok(())
}
