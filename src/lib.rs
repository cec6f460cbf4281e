// Library exports for testing and embedding
//
// # Mutex Usage Policy
//
// tab-shuttle uses two mutex types:
//
//   - `tokio::sync::Mutex`:    per-tab locks in the dispatcher, held across
//                              `.await` while a trigger is being handled.
//
//   - `parking_lot::Mutex`:    memory tables and the in-memory host state.
//                              Guards are taken for one lookup or write and
//                              must never be held across an `.await`.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod command;
pub mod debug;
pub mod direction;
pub mod dispatcher;
pub mod error;
pub mod navigation;
pub mod platform;
pub mod popup;
pub mod position_memory;
pub mod relocation;
pub mod window_set;

pub use command::{Action, Command, Trigger};
pub use direction::{Direction, Side};
pub use dispatcher::Dispatcher;
pub use error::ShuttleError;
pub use platform::{MemoryPlatform, Platform, PlatformError};
pub use position_memory::PositionMemory;
pub use tab_shuttle_config::Settings;
