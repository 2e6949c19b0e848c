pub mod relay;
pub mod youtube;

pub use relay::VideoRelay;
pub use youtube::{VideoFetcher, YtDlpFetcher};
