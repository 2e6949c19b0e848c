use teloxide::prelude::*;

use crate::errors::HandlerResult;

pub const GREETING: &str = "Hello! Send me /video <link> and I'll fetch the YouTube video for you.";

pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING).await?;
    Ok(())
}
