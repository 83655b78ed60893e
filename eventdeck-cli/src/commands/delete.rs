use anyhow::Result;
use dialoguer::Confirm;
use eventdeck_core::error::StoreError;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render;

pub async fn run(app: &App, id: &str, force: bool) -> Result<()> {
    // Fetch first so the prompt can name the event (and a bad id fails
    // before anything is asked).
    let spinner = render::spinner("Fetching event...".to_string());
    let result = app.cache.event(&app.client, id).await;
    spinner.finish_and_clear();
    let event = result?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete \"{}\"? This cannot be undone.",
                event.title
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    let spinner = render::spinner("Deleting event...".to_string());
    let result = submit_delete(app, id).await;
    spinner.finish_and_clear();

    result?;
    println!("{}", format!("Deleted: {}", event.title).green());

    Ok(())
}

pub(crate) async fn submit_delete(app: &App, id: &str) -> Result<(), StoreError> {
    app.client.delete_event(id).await?;
    app.cache.note_deleted(id);
    Ok(())
}
