// Adapters layer: concrete implementations of the domain ports (storage, probes, browser host).

pub mod host;
pub mod probe;
pub mod storage;

pub use host::{LocalHost, RecordingHost};
pub use probe::{FsProbe, HttpProbe};
pub use storage::LocalStorage;
