use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use suggest::SuggestClient;

mod board;
mod keyboard;
mod suggest;
mod tui;

#[derive(Parser)]
#[command(
    name = "slovobot",
    about = "Terminal assistant for the five-letter word game"
)]
struct Args {
    /// Suggestion service endpoint
    #[arg(short, long, default_value = "http://127.0.0.1:5000/get_suggestions")]
    endpoint: String,

    /// Where to write the debug log
    #[arg(long, default_value = "slovobot.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();
    color_eyre::install()?;

    // File logger: the terminal itself belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
    log::info!("slovobot starting, suggestion endpoint: {}", args.endpoint);

    tui::initialize_panic_handler();
    let mut terminal = tui::init()?;
    let app_result = tui::App::init(SuggestClient::new(args.endpoint))
        .run(&mut terminal)
        .await;
    tui::restore()?;
    Ok(app_result?)
}
