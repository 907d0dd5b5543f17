//! Behavior engine: picks the creature's mood from its health

use pawlink_core::health::{HealthModel, Link};

/// Mood for the current health readings
///
/// Losing the wireless link makes the creature sad; going without a touch
/// makes it hungry for attention.
pub fn choose(health: &HealthModel) -> &'static str {
    let wireless = health.percent(Link::Wireless);
    let contact = health.percent(Link::Contact);

    if wireless == 0 && contact == 0 {
        "sleeping"
    } else if wireless == 0 {
        "sad"
    } else if contact < 25 {
        "hungry"
    } else if wireless >= 70 && contact >= 70 {
        "happy"
    } else {
        "idle"
    }
}
