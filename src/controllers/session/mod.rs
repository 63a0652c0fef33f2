pub mod config;
pub mod explorer_session;
pub mod frame_snapshot;
pub mod telemetry;

pub use config::{ExplorerConfig, ExplorerConfigError};
pub use explorer_session::{ExplorerSession, ExplorerSessionError};
pub use frame_snapshot::{FrameSnapshot, RenderFrameError};
pub use telemetry::FrameTelemetry;
