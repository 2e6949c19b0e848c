use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{error, info, warn};
use serde::Deserialize;
use tokio::{fs, process};

use crate::errors::{BotError, BotResult};

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Outcome of a metadata-only size lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeCheck {
    pub within_limit: bool,
    pub size_mb: f64,
}

/// Boundary around the external downloader.
///
/// Implementations never fail: errors are logged and turned into
/// `SizeCheck { within_limit: false, .. }` or `None`.
#[async_trait]
pub trait VideoFetcher: Send + Sync {
    async fn check_size(&self, url: &str) -> SizeCheck;

    async fn download(&self, url: &str) -> Option<PathBuf>;
}

#[derive(Debug, Deserialize)]
struct YtDlpInfo {
    filesize: Option<f64>,
    filesize_approx: Option<f64>,
}

/// Turns a size lookup into a verdict.
///
/// A lookup that succeeded without a size passes (size 0), a lookup that
/// failed does not pass (size 0).
pub fn size_check_from(lookup: BotResult<Option<f64>>, max_size_mb: u64) -> SizeCheck {
    match lookup {
        Ok(Some(bytes)) => {
            let size_mb = bytes / BYTES_PER_MB;
            SizeCheck {
                within_limit: size_mb <= max_size_mb as f64,
                size_mb,
            }
        }
        Ok(None) => {
            warn!("Video size is unknown, assuming it fits");
            SizeCheck {
                within_limit: true,
                size_mb: 0.0,
            }
        }
        Err(e) => {
            error!("Failed to look up video size: {}", e);
            SizeCheck {
                within_limit: false,
                size_mb: 0.0,
            }
        }
    }
}

/// Extracts the selected format's size in bytes from `yt-dlp -J` output.
fn parse_size(json: &str) -> BotResult<Option<f64>> {
    let info: YtDlpInfo = serde_json::from_str(json)?;
    Ok(info.filesize.or(info.filesize_approx))
}

/// `yt-dlp` backed fetcher writing into a single output directory.
#[derive(Debug, Clone)]
pub struct YtDlpFetcher {
    program: String,
    output_dir: PathBuf,
    max_size_mb: u64,
}

impl YtDlpFetcher {
    pub fn new(program: impl Into<String>, output_dir: impl Into<PathBuf>, max_size_mb: u64) -> Self {
        Self {
            program: program.into(),
            output_dir: output_dir.into(),
            max_size_mb,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(1024 * 1024)
    }

    /// Best single-file format that fits under the ceiling, any best otherwise.
    fn format_selector(&self) -> String {
        format!("best[filesize<={}]/best", self.max_size_bytes())
    }

    fn output_template(&self) -> String {
        self.output_dir
            .join(OUTPUT_TEMPLATE)
            .to_string_lossy()
            .into_owned()
    }

    fn base_command(&self) -> process::Command {
        let mut cmd = process::Command::new(&self.program);
        cmd.arg("--no-playlist")
            .args(["--quiet", "--no-warnings"])
            .args(["-f", &self.format_selector()]);
        cmd
    }

    async fn run(&self, mut cmd: process::Command) -> BotResult<String> {
        let output = cmd
            .output()
            .await
            .map_err(|e| BotError::external_command_error(&self.program, e.to_string()))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(BotError::youtube_error(stderr))
        }
    }

    async fn probe_size(&self, url: &str) -> BotResult<Option<f64>> {
        let mut cmd = self.base_command();
        cmd.arg("-J").arg(url);

        let json = self.run(cmd).await?;
        parse_size(&json)
    }

    async fn fetch(&self, url: &str) -> BotResult<Option<PathBuf>> {
        fs::create_dir_all(&self.output_dir).await?;

        let mut cmd = self.base_command();
        cmd.args(["--max-filesize", &self.max_size_bytes().to_string()])
            .arg("--no-simulate")
            .args(["-o", &self.output_template()])
            .args(["--print", "after_move:filepath"])
            .arg(url);

        info!("Starting download: {}", url);
        let stdout = self.run(cmd).await?;

        // Only printed once the file is finished and moved into place.
        Ok(stdout
            .lines()
            .map(str::trim)
            .rev()
            .find(|line| !line.is_empty())
            .map(PathBuf::from))
    }
}

#[async_trait]
impl VideoFetcher for YtDlpFetcher {
    async fn check_size(&self, url: &str) -> SizeCheck {
        let check = size_check_from(self.probe_size(url).await, self.max_size_mb);
        info!(
            "Size check for {}: {:.2} MB (within limit: {})",
            url, check.size_mb, check.within_limit
        );
        check
    }

    async fn download(&self, url: &str) -> Option<PathBuf> {
        match self.fetch(url).await {
            Ok(Some(path)) => {
                info!("Download successful: {}", path.display());
                Some(path)
            }
            Ok(None) => {
                warn!("yt-dlp finished without reporting a file for {}", url);
                None
            }
            Err(e) => {
                error!("yt-dlp failed for {}: {}", url, e);
                None
            }
        }
    }
}
