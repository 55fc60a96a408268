pub mod common;
pub mod updater;

pub use updater::{fetch_status, ClusterStatusUpdater, SUCCESS_MESSAGE};
