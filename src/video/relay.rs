use std::sync::Arc;

use log::{error, info};

use crate::{
    errors::HandlerResult,
    reply::ReplySink,
    temp_file::TempFile,
    utils::LinkValidator,
    video::VideoFetcher,
};

pub const MISSING_LINK: &str = "Please provide a YouTube link: /video <link>";
pub const INVALID_LINK: &str = "This is not a valid YouTube link.";
pub const DOWNLOADING: &str = "Downloading the video, please wait...";
pub const DOWNLOAD_FAILED: &str = "Couldn't download the video, maybe the link is invalid.";
pub const SEND_FAILED: &str = "Something went wrong while sending the video.";

pub fn too_large_message(size_mb: f64, max_size_mb: u64) -> String {
    format!(
        "The video is too large ({:.2} MB). The limit is {} MB.",
        size_mb, max_size_mb
    )
}

/// Runs `/video <link>`: validate, check size, download, upload, clean up.
pub struct VideoRelay {
    validator: Arc<dyn LinkValidator>,
    fetcher: Arc<dyn VideoFetcher>,
    max_size_mb: u64,
}

impl VideoRelay {
    pub fn new(
        validator: Arc<dyn LinkValidator>,
        fetcher: Arc<dyn VideoFetcher>,
        max_size_mb: u64,
    ) -> Self {
        Self {
            validator,
            fetcher,
            max_size_mb,
        }
    }

    pub async fn handle(&self, args: &str, reply: &dyn ReplySink) -> HandlerResult {
        let Some(url) = args.split_whitespace().next() else {
            reply.send_text(MISSING_LINK).await?;
            return Ok(());
        };

        if !self.validator.is_acceptable(url) {
            info!("Rejected link: {}", url);
            reply.send_text(INVALID_LINK).await?;
            return Ok(());
        }

        let size = self.fetcher.check_size(url).await;
        if !size.within_limit {
            reply
                .send_text(&too_large_message(size.size_mb, self.max_size_mb))
                .await?;
            return Ok(());
        }

        reply.send_text(DOWNLOADING).await?;

        let Some(path) = self.fetcher.download(url).await else {
            reply.send_text(DOWNLOAD_FAILED).await?;
            return Ok(());
        };

        let video = TempFile::new(path);
        let sent = reply.send_video(video.path()).await;
        // Removed whether or not the upload went through.
        drop(video);

        if let Err(e) = sent {
            error!("Failed to send video for {}: {}", url, e);
            reply.send_text(SEND_FAILED).await?;
        }

        Ok(())
    }
}
