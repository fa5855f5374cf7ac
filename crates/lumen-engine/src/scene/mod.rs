//! Instance storage handed to the stages for one draw call.
//!
//! Responsibilities:
//! - define the plain-old-data `Quad` / `Shadow` records and their tags
//! - store them in flat, append-only arrays addressed by `InstanceId`
//! - expose byte views so a host can upload or load records without copies
//!
//! Ordering, batching and clip-stack resolution happen upstream; the records
//! arrive fully resolved.

mod buffer;
mod frame;
mod view_id;

pub mod shapes;

pub use buffer::{InstanceBuffer, InstanceId};
pub use frame::Scene;
pub use shapes::{Quad, Shadow};
pub use view_id::ViewId;
