mod help;
mod sample;
mod start;
mod video;

pub use help::help;
pub use sample::sample;
pub use start::start;
pub use video::video;
