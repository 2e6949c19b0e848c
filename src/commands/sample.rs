use std::{path::Path, sync::Arc};

use teloxide::prelude::*;

use crate::{
    config::Config,
    errors::HandlerResult,
    reply::{ChatReply, ReplySink},
};

/// Sends the bundled sample video. A missing file surfaces as a handler error.
pub async fn sample(bot: Bot, msg: Message, config: Arc<Config>) -> HandlerResult {
    let reply = ChatReply::new(bot, msg.chat.id);
    send_sample(&reply, &config.sample_video).await
}

pub async fn send_sample(reply: &dyn ReplySink, path: &Path) -> HandlerResult {
    log::info!("Sending sample video {}", path.display());
    reply.send_video(path).await
}
