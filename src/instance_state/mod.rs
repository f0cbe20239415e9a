//! In-memory instance state for suspend/restore
//!
//! When the window is minimized the running round is torn down and only a
//! small key/value bundle survives, the same way a mobile screen keeps its
//! instance state across a configuration change. Restoring the window rebuilds
//! the round from that bundle.
//!
//! # Architecture
//!
//! - `types`: bundle keys and the error type
//! - `store`: `InstanceState`, which holds at most one serialized bundle
//!
//! Nothing here touches the disk; the bundle lives only as long as the process.
//!
//! # Example Usage
//!
//! ```ignore
//! let mut instance_state = InstanceState::new();
//! instance_state.save(&controller.suspend())?;
//!
//! // later
//! let snapshot = instance_state.restore()?;
//! let controller = GameController::restored(settings, snapshot);
//! ```

pub mod store;
pub mod types;

pub use store::InstanceState;
pub use types::InstanceStateError;
