use std::path::Path;

use async_trait::async_trait;
use teloxide::{prelude::*, types::InputFile};

use crate::errors::BotResult;

/// Handle back to the conversation a command came from.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_text(&self, text: &str) -> BotResult<()>;

    async fn send_video(&self, path: &Path) -> BotResult<()>;
}

pub struct ChatReply {
    bot: Bot,
    chat_id: ChatId,
}

impl ChatReply {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ReplySink for ChatReply {
    async fn send_text(&self, text: &str) -> BotResult<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }

    async fn send_video(&self, path: &Path) -> BotResult<()> {
        self.bot
            .send_video(self.chat_id, InputFile::file(path.to_path_buf()))
            .supports_streaming(true)
            .await?;
        Ok(())
    }
}
