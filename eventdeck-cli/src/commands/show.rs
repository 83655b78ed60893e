use anyhow::Result;

use crate::app::App;
use crate::render::{self, Render};

pub async fn run(app: &App, id: &str) -> Result<()> {
    let spinner = render::spinner("Fetching event...".to_string());
    let result = app.cache.event(&app.client, id).await;
    spinner.finish_and_clear();

    let event = result?;
    println!("{}", event.render_detail());

    Ok(())
}
