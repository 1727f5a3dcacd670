mod app;
mod build;
mod enter;
mod path;

pub use app::App;

use anyhow::Result;

pub fn run(app: App) -> Result<()> {
    match app.cmd {
        app::Commands::Build(arg) => build::run(arg),
        app::Commands::Path(arg) => path::run(arg),
        app::Commands::Enter(arg) => enter::run(arg),
    }
}
