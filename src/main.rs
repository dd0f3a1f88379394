use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use terra::core::config::{self, CliOverrides};
use terra::core::route::Route;

#[derive(Parser)]
#[command(name = "terra", about = "Browse, search and compare countries")]
struct Args {
    /// Base URL of the country-data API
    #[arg(long)]
    base_url: Option<String>,

    /// Open the detail view for this country instead of the list
    #[arg(short, long)]
    country: Option<String>,

    /// Go back to page 1 whenever the search text changes
    #[arg(long)]
    reset_page_on_search: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, origin) = match config::load_config() {
        Ok((c, origin)) => (c, Ok(origin)),
        Err(e) => (config::TerraConfig::default(), Err(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            reset_page_on_search: args.reset_page_on_search,
        },
    );

    // Initialize file logger; the terminal belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    // Config was read before the logger existed; report it now
    match &origin {
        Ok(origin) => origin.log(),
        Err(e) => log::warn!("{e}; using defaults"),
    }
    for warning in &resolved.warnings {
        log::warn!("{warning}");
    }
    log::debug!("Config: {:?}", file_config);
    log::info!("terra starting up against {}", resolved.base_url);

    let start = args
        .country
        .as_deref()
        .map(Route::detail_for)
        .unwrap_or(Route::List);

    terra::tui::run(resolved, start)
}
