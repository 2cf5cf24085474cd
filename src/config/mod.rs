#[cfg(feature = "cli")]
pub mod cli;
pub mod site_config;

#[cfg(feature = "cli")]
pub use cli::{BuildArgs, CheckArgs, CliConfig, Command, FetchArgs};
pub use site_config::SiteConfig;
