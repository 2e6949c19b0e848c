mod commands;
mod config;
mod errors;
mod reply;
mod schema;
mod temp_file;
mod utils;
mod video;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use teloxide::prelude::*;

use crate::{
    config::Config,
    errors::BotResult,
    schema::schema,
    utils::HostAllowList,
    video::{VideoRelay, YtDlpFetcher},
};

fn init_logging() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> BotResult<()> {
    let _ = dotenvy::dotenv();
    init_logging();

    println!("Starting the bot");
    let config = Config::from_env()?;

    let validator = HostAllowList::new(&config.allowed_hosts)?;
    let fetcher = YtDlpFetcher::new(
        config.yt_dlp_path.clone(),
        config.video_dir.clone(),
        config.max_video_size_mb,
    );
    log::info!(
        "Downloads go to {} (limit {} MB)",
        fetcher.output_dir().display(),
        config.max_video_size_mb
    );
    let relay = VideoRelay::new(
        Arc::new(validator),
        Arc::new(fetcher),
        config.max_video_size_mb,
    );

    let bot = Bot::new(config.bot_token.clone());

    println!("Polling...");
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![Arc::new(config), Arc::new(relay)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Bot stopped");
    Ok(())
}
