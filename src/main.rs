use anyhow::Result;
use clap::Parser;
use snake_tui::app::App;
use snake_tui::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "24")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "24")]
    height: usize,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "75")]
    tick_ms: u64,

    /// Name shown in the score header; display only, never stored
    #[arg(long, default_value = "Player")]
    username: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        tick_interval_ms: cli.tick_ms,
        ..GameConfig::new(cli.width, cli.height)
    };
    config.validate()?;

    let mut app = App::new(config, cli.username);
    app.run().await?;

    Ok(())
}
