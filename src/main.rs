mod app;
mod cli;
mod clipboard;
mod color;
mod event;
mod moods;
mod palette;
mod tui;
mod types;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let registry = moods::load_registry(cli_opts.moods.as_deref())?;
    if let Some(command) = cli_opts.command {
        return cli::run(command, &registry);
    }

    let reveal_delay = Duration::from_millis(cli_opts.delay_ms);
    let mut app = app::App::new(registry, reveal_delay);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
