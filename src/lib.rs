pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use adapters::{FsProbe, HttpProbe, LocalHost, LocalStorage, RecordingHost};
pub use crate::core::download::{DispatchOutcome, DownloadDispatcher, DownloadRequest};
pub use crate::core::notification::NotificationCenter;
pub use crate::core::render::Renderer;
pub use crate::core::site::SiteBuilder;
pub use domain::model::Portfolio;
pub use utils::error::{Result, SiteError};
