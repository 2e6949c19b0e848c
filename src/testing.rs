use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use async_trait::async_trait;

use crate::{
    errors::BotResult,
    reply::ReplySink,
    video::{VideoFetcher, youtube::SizeCheck},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text(String),
    Video { path: PathBuf, existed: bool },
}

/// Records every reply; optionally fails video uploads.
#[derive(Default)]
pub struct RecordingSink {
    pub sent: Mutex<Vec<Sent>>,
    pub fail_video: bool,
}

impl RecordingSink {
    pub fn failing_video() -> Self {
        Self {
            fail_video: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text(t) => Some(t),
                Sent::Video { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send_text(&self, text: &str) -> BotResult<()> {
        self.sent.lock().unwrap().push(Sent::Text(text.to_string()));
        Ok(())
    }

    async fn send_video(&self, path: &Path) -> BotResult<()> {
        self.sent.lock().unwrap().push(Sent::Video {
            path: path.to_path_buf(),
            existed: path.exists(),
        });
        if self.fail_video {
            Err(std::io::Error::other("upload rejected").into())
        } else {
            Ok(())
        }
    }
}

/// Fetcher returning canned answers and logging which operations ran.
pub struct StubFetcher {
    pub size: SizeCheck,
    pub file: Option<PathBuf>,
    pub calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new(size: SizeCheck, file: Option<PathBuf>) -> Self {
        Self {
            size,
            file,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoFetcher for StubFetcher {
    async fn check_size(&self, url: &str) -> SizeCheck {
        self.calls.lock().unwrap().push(format!("check_size {url}"));
        self.size
    }

    async fn download(&self, url: &str) -> Option<PathBuf> {
        self.calls.lock().unwrap().push(format!("download {url}"));
        self.file.clone()
    }
}

/// Creates a file under a fresh temporary directory.
pub fn temp_video(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("relay-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, b"\x00\x00\x00\x18ftypmp42").unwrap();
    path
}
