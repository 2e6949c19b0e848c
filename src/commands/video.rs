use std::sync::Arc;

use teloxide::prelude::*;

use crate::{errors::HandlerResult, reply::ChatReply, video::VideoRelay};

pub async fn video(bot: Bot, msg: Message, args: String, relay: Arc<VideoRelay>) -> HandlerResult {
    log::info!("/video from chat {}: {:?}", msg.chat.id, args);
    let reply = ChatReply::new(bot, msg.chat.id);
    relay.handle(&args, &reply).await
}
