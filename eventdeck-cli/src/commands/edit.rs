use anyhow::Result;
use chrono::{DateTime, Utc};
use dialoguer::Input;
use eventdeck_core::Event;
use eventdeck_core::error::StoreError;
use eventdeck_core::validate::{EventForm, validate_edited_event};
use owo_colors::OwoColorize;

use super::EventFields;
use crate::app::App;
use crate::render;

pub async fn run(app: &App, id: &str, fields: EventFields) -> Result<()> {
    let spinner = render::spinner("Fetching event...".to_string());
    let result = app.cache.event(&app.client, id).await;
    spinner.finish_and_clear();
    let current = result?;

    // No flags at all: prompt for every field, prefilled with the current
    // values. With flags: flags override, the rest keeps its value.
    let interactive = fields.is_empty();

    let form = EventForm {
        title: resolve(fields.title, "  Title", current.title.clone(), interactive)?,
        description: resolve(
            fields.description,
            "  Description",
            current.description.clone(),
            interactive,
        )?,
        image: resolve(
            fields.image,
            "  Image URL",
            current.image.clone().unwrap_or_default(),
            interactive,
        )?,
        start: resolve(
            fields.start,
            "  Start",
            datetime_input(&current.start_time),
            interactive,
        )?,
        end: resolve(
            fields.end,
            "  End",
            datetime_input(&current.end_time),
            interactive,
        )?,
        location: resolve(fields.location, "  Location", current.location.clone(), interactive)?,
        categories: resolve(
            fields.categories,
            "  Categories (comma-separated)",
            current.categories.join(", "),
            interactive,
        )?,
        organizer: resolve(
            fields.organizer,
            "  Organizer",
            current.organizer.clone(),
            interactive,
        )?,
        organizer_image: resolve(
            fields.organizer_image,
            "  Organizer image URL",
            current.organizer_image.clone().unwrap_or_default(),
            interactive,
        )?,
    };

    let spinner = render::spinner("Saving changes...".to_string());
    let result = submit_edit(app, id, &form).await;
    spinner.finish_and_clear();

    match result {
        Ok(updated) => {
            println!("{}", format!("Updated: {}", updated.title).green());
            Ok(())
        }
        Err(StoreError::Validation(errors)) => {
            println!("{}", "The event was not saved:".red());
            for issue in errors.issues() {
                println!("  {} {}", "-".red(), issue.message().red());
            }
            anyhow::bail!("fix the fields above and try again");
        }
        Err(err) => Err(err.into()),
    }
}

/// Validate the form and replace the full record. Nothing is sent to the
/// store unless the form passes validation.
pub(crate) async fn submit_edit(
    app: &App,
    id: &str,
    form: &EventForm,
) -> Result<Event, StoreError> {
    let event = validate_edited_event(id, form)?;
    let updated = app.client.update_event(&event).await?;
    app.cache.note_updated(id);
    Ok(updated)
}

fn resolve(flag: Option<String>, prompt: &str, current: String, interactive: bool) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::new()
            .with_prompt(prompt)
            .default(current)
            .interact_text()?),
        None => Ok(current),
    }
}

/// Current instant in the shape the form parser accepts.
fn datetime_input(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M").to_string()
}
