use regex::Regex;

use crate::errors::{BotError, BotResult};

pub const DEFAULT_ALLOWED_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Decides whether a link may be handed to the downloader.
pub trait LinkValidator: Send + Sync {
    fn is_acceptable(&self, url: &str) -> bool;
}

/// Accepts `[http(s)://][www.]<host>/<path>` where host is on the allow-list.
#[derive(Debug, Clone)]
pub struct HostAllowList {
    pattern: Regex,
}

impl HostAllowList {
    pub fn new<I, S>(hosts: I) -> BotResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts: Vec<String> = hosts
            .into_iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .filter(|h| !h.is_empty())
            .map(|h| regex::escape(&h))
            .collect();

        if hosts.is_empty() {
            return Err(BotError::config_error("Host allow-list is empty"));
        }

        let pattern = Regex::new(&format!(
            r"(?i)^(?:https?://)?(?:www\.)?(?:{})/\S+$",
            hosts.join("|")
        ))?;

        Ok(Self { pattern })
    }

    pub fn youtube() -> BotResult<Self> {
        Self::new(DEFAULT_ALLOWED_HOSTS)
    }
}

impl LinkValidator for HostAllowList {
    fn is_acceptable(&self, url: &str) -> bool {
        self.pattern.is_match(url.trim())
    }
}
