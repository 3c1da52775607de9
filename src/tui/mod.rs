pub mod app;
pub mod colors;
pub mod grid;
pub mod search;
pub mod ui;

use crate::loader::LoadConfig;

/// Entry point: launch the interactive card browser
pub fn run(config: LoadConfig) -> crate::Result<()> {
    let mut terminal = ratatui::init();
    let mut app = app::App::new(config);
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}
