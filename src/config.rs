use std::path::PathBuf;

use teloxide::utils::command::BotCommands;

use crate::{
    errors::{BotError, BotResult},
    schema::Command,
    utils::DEFAULT_ALLOWED_HOSTS,
};

pub const DEFAULT_VIDEO_DIR: &str = "example_videos";
pub const DEFAULT_SAMPLE_VIDEO: &str = "example_1.mp4";
pub const DEFAULT_MAX_VIDEO_SIZE_MB: u64 = 50;
pub const DEFAULT_YT_DLP_PATH: &str = "yt-dlp";

/// Settings resolved once at startup and shared with the handlers.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub help_text: String,
    /// Directory downloads are written to
    pub video_dir: PathBuf,
    /// File sent by `/sample`
    pub sample_video: PathBuf,
    /// Largest video forwarded to a chat, in megabytes
    pub max_video_size_mb: u64,
    pub yt_dlp_path: String,
    pub allowed_hosts: Vec<String>,
}

impl Config {
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BotResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bot_token = var("BOT_TOKEN")
            .or_else(|| var("TELOXIDE_TOKEN"))
            .ok_or_else(|| BotError::config_error("BOT_TOKEN is not set"))?;

        let help_text = var("HELP_TEXT")
            .map(|text| text.replace("\\n", "\n"))
            .unwrap_or_else(|| Command::descriptions().to_string());

        let video_dir = PathBuf::from(var("VIDEO_DIR").unwrap_or_else(|| DEFAULT_VIDEO_DIR.into()));
        let sample_video = var("SAMPLE_VIDEO")
            .map(PathBuf::from)
            .unwrap_or_else(|| video_dir.join(DEFAULT_SAMPLE_VIDEO));

        let max_video_size_mb = match var("MAX_VIDEO_SIZE_MB") {
            Some(raw) => match raw.trim().parse::<u64>() {
                // Must stay representable in bytes.
                Ok(mb) if mb > 0 && mb.checked_mul(1024 * 1024).is_some() => mb,
                _ => {
                    return Err(BotError::config_error(format!(
                        "MAX_VIDEO_SIZE_MB must be a positive integer that fits in bytes, got {raw:?}"
                    )));
                }
            },
            None => DEFAULT_MAX_VIDEO_SIZE_MB,
        };

        let yt_dlp_path = var("YT_DLP_PATH").unwrap_or_else(|| DEFAULT_YT_DLP_PATH.into());

        let allowed_hosts: Vec<String> = match var("ALLOWED_HOSTS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_ALLOWED_HOSTS.iter().map(|h| h.to_string()).collect(),
        };
        if allowed_hosts.is_empty() {
            return Err(BotError::config_error("ALLOWED_HOSTS contains no hosts"));
        }

        Ok(Self {
            bot_token,
            help_text,
            video_dir,
            sample_video,
            max_video_size_mb,
            yt_dlp_path,
            allowed_hosts,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> BotResult<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = config_from(&[("BOT_TOKEN", "123:abc")]).unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.video_dir, PathBuf::from("example_videos"));
        assert_eq!(config.sample_video, PathBuf::from("example_videos/example_1.mp4"));
        assert_eq!(config.max_video_size_mb, 50);
        assert_eq!(config.yt_dlp_path, "yt-dlp");
        assert_eq!(config.allowed_hosts, vec!["youtube.com", "youtu.be"]);
        assert!(config.help_text.contains("/video"));
    }

    #[test]
    fn missing_token_is_an_error() {
        assert!(matches!(config_from(&[]), Err(BotError::ConfigError(_))));
        assert!(config_from(&[("BOT_TOKEN", "  ")]).is_err());
    }

    #[test]
    fn teloxide_token_is_a_fallback() {
        let config = config_from(&[("TELOXIDE_TOKEN", "42:xyz")]).unwrap();
        assert_eq!(config.bot_token, "42:xyz");
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("BOT_TOKEN", "t"),
            ("HELP_TEXT", "/video <link>\\n/start"),
            ("VIDEO_DIR", "/tmp/videos"),
            ("MAX_VIDEO_SIZE_MB", "20"),
            ("YT_DLP_PATH", "/usr/local/bin/yt-dlp"),
            ("ALLOWED_HOSTS", "youtube.com, vimeo.com ,"),
        ])
        .unwrap();

        assert_eq!(config.help_text, "/video <link>\n/start");
        assert_eq!(config.sample_video, PathBuf::from("/tmp/videos/example_1.mp4"));
        assert_eq!(config.max_video_size_mb, 20);
        assert_eq!(config.yt_dlp_path, "/usr/local/bin/yt-dlp");
        assert_eq!(config.allowed_hosts, vec!["youtube.com", "vimeo.com"]);
    }

    #[test]
    fn invalid_size_is_rejected() {
        assert!(config_from(&[("BOT_TOKEN", "t"), ("MAX_VIDEO_SIZE_MB", "lots")]).is_err());
        assert!(config_from(&[("BOT_TOKEN", "t"), ("MAX_VIDEO_SIZE_MB", "0")]).is_err());
    }

    #[test]
    fn size_overflowing_bytes_is_rejected() {
        let too_big = (u64::MAX / (1024 * 1024) + 1).to_string();
        assert!(matches!(
            config_from(&[("BOT_TOKEN", "t"), ("MAX_VIDEO_SIZE_MB", too_big.as_str())]),
            Err(BotError::ConfigError(_))
        ));

        let largest = (u64::MAX / (1024 * 1024)).to_string();
        let config = config_from(&[("BOT_TOKEN", "t"), ("MAX_VIDEO_SIZE_MB", largest.as_str())]).unwrap();
        assert_eq!(config.max_video_size_mb, u64::MAX / (1024 * 1024));
    }

    #[test]
    fn empty_host_list_is_rejected() {
        assert!(config_from(&[("BOT_TOKEN", "t"), ("ALLOWED_HOSTS", " , ")]).is_err());
    }
}
