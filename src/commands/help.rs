use std::sync::Arc;

use teloxide::prelude::*;

use crate::{config::Config, errors::HandlerResult};

pub async fn help(bot: Bot, msg: Message, config: Arc<Config>) -> HandlerResult {
    bot.send_message(msg.chat.id, config.help_text.as_str()).await?;
    Ok(())
}
