//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus
//! - `NotificationRelay` - Event consumer that turns enrollment events
//!   into citizen notifications

mod in_memory;
mod notification_relay;

pub use in_memory::InMemoryEventBus;
pub use notification_relay::NotificationRelay;
