use teloxide::{dispatching::UpdateHandler, prelude::*, utils::command::BotCommands};

use crate::{commands::*, errors::BotError};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    /// Say hello
    Start,
    /// Show this message
    Help,
    /// Download a YouTube video: /video <link>
    Video(String),
    /// Send a sample video
    Sample,
}

pub fn schema() -> UpdateHandler<BotError> {
    use dptree::case;

    // Messages that don't parse as a known command fall through unhandled.
    Update::filter_message().branch(
        teloxide::filter_command::<Command, _>()
            .branch(case![Command::Start].endpoint(start))
            .branch(case![Command::Help].endpoint(help))
            .branch(case![Command::Video(args)].endpoint(video))
            .branch(case![Command::Sample].endpoint(sample)),
    )
}
