pub mod animation;
pub mod check;
pub mod download;
pub mod interaction;
pub mod notification;
pub mod page;
pub mod render;
pub mod site;

pub use crate::domain::model::Portfolio;
pub use crate::domain::ports::{ArtifactProbe, BrowserAction, BrowserHost, ProbeOutcome, Storage};
pub use crate::utils::error::Result;
