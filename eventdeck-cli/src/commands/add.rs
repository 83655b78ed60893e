use anyhow::Result;
use dialoguer::Input;
use eventdeck_core::Event;
use eventdeck_core::error::StoreError;
use eventdeck_core::validate::{EventForm, validate_new_event};
use owo_colors::OwoColorize;

use super::EventFields;
use crate::app::App;
use crate::render;

pub async fn run(app: &App, fields: EventFields) -> Result<()> {
    let prompt_optional = fields.is_empty();

    let form = EventForm {
        title: required(fields.title, "  Title")?,
        description: required(fields.description, "  Description")?,
        image: optional(fields.image, "  Image URL (skip)", prompt_optional)?,
        start: required(fields.start, "  Start (e.g. 2025-03-20T18:00)")?,
        end: required(fields.end, "  End")?,
        location: required(fields.location, "  Location")?,
        categories: required(fields.categories, "  Categories (comma-separated)")?,
        organizer: required(fields.organizer, "  Organizer")?,
        organizer_image: optional(fields.organizer_image, "  Organizer image URL (skip)", prompt_optional)?,
    };

    let spinner = render::spinner("Creating event...".to_string());
    let result = submit_new(app, &form).await;
    spinner.finish_and_clear();

    match result {
        Ok(created) => {
            println!(
                "{}",
                format!("Created: {} ({})", created.title, created.id).green()
            );
            Ok(())
        }
        Err(StoreError::Validation(errors)) => {
            println!("{}", "The event was not created:".red());
            for issue in errors.issues() {
                println!("  {} {}", "-".red(), issue.message().red());
            }
            anyhow::bail!("fix the fields above and try again");
        }
        Err(err) => Err(err.into()),
    }
}

/// Validate the form and create the event. Nothing is sent to the store
/// unless the form passes validation.
pub(crate) async fn submit_new(app: &App, form: &EventForm) -> Result<Event, StoreError> {
    let draft = validate_new_event(form)?;
    let created = app.client.create_event(&draft).await?;
    app.cache.note_created();
    Ok(created)
}

/// Use the flag value if given, otherwise prompt.
fn required(flag: Option<String>, prompt: &str) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

/// Optional fields are only prompted for in fully interactive mode, and
/// can be left blank.
fn optional(flag: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?),
        None => Ok(String::new()),
    }
}
