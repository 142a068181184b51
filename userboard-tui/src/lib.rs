mod app;
mod events;
mod ui;

use app::App;
use color_eyre::Result;

use std::sync::Arc;

use userboard_service::UserApi;

/// Run the user board until the user quits. `title` is shown in the header.
pub async fn run(api: Arc<dyn UserApi>, title: impl Into<String>) -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new(api, title).run(terminal).await;
    ratatui::restore();
    result
}
