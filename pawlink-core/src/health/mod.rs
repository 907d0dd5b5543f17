//! Health decay model
//!
//! Two independent channels stand in for "time since the last confirming
//! signal" on the wireless link and on the physical-contact link.

pub mod channel;
pub mod events;
pub mod model;

pub use channel::{HealthChannel, Link, HEALTH_MAX};
pub use events::{
    split, HealthEvent, HealthEventQueue, HealthEventReceiver, HealthEventSender, HealthEvents,
    HEALTH_QUEUE_SIZE,
};
pub use model::HealthModel;
