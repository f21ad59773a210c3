//! rclone orchestration - locating, invoking, and parsing the external binary

mod install;
mod listing;
mod locate;
mod runner;

pub use install::install;
pub use listing::parse_listing;
pub use locate::{installed_binary, locate, release_asset_name, BINARY_NAME, DOWNLOAD_BASE_URL};
pub use runner::{CapturedOutput, RcloneRunner, DEFAULT_TIMEOUT_SECS};
