//! Two-channel health model
//!
//! Wireless health drains quickly (the radio syncs often), contact health
//! drains slowly. Each refills to 100 when its signal is seen.

use super::channel::{HealthChannel, Link};
use super::events::{HealthEventReceiver, HealthEvents};
use crate::config::HealthConfig;

/// Health state for both links
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HealthModel {
    wireless: HealthChannel,
    contact: HealthChannel,
}

impl HealthModel {
    /// Create a model with both channels full as of `now_ms`
    pub fn new(config: &HealthConfig, now_ms: u64) -> Self {
        Self {
            wireless: HealthChannel::new(config.wireless_timeout_ms(), now_ms),
            contact: HealthChannel::new(config.contact_timeout_ms(), now_ms),
        }
    }

    /// Refill one channel
    pub fn reset(&mut self, link: Link, at_ms: u64) {
        debug!("{} health reset at {}", link.name(), at_ms);
        self.channel_mut(link).reset(at_ms);
    }

    /// Recompute both channels for the clock reading `now_ms`
    ///
    /// Call before reading values; safe to call on every tick.
    pub fn update(&mut self, now_ms: u64) {
        for link in [Link::Wireless, Link::Contact] {
            let channel = self.channel_mut(link);
            let was_depleted = channel.is_depleted();
            channel.update(now_ms);
            if channel.is_depleted() && !was_depleted {
                info!("{} health depleted", link.name());
            }
        }
    }

    /// Apply every queued event, oldest first
    ///
    /// Returns the number of events applied.
    pub fn apply_events<const N: usize>(&mut self, rx: &mut HealthEventReceiver<'_, N>) -> usize {
        let mut applied = 0;
        while let Some(event) = rx.dequeue() {
            self.reset(event.link, event.at_ms);
            applied += 1;
        }
        applied
    }

    /// Get a channel
    pub fn channel(&self, link: Link) -> &HealthChannel {
        match link {
            Link::Wireless => &self.wireless,
            Link::Contact => &self.contact,
        }
    }

    fn channel_mut(&mut self, link: Link) -> &mut HealthChannel {
        match link {
            Link::Wireless => &mut self.wireless,
            Link::Contact => &mut self.contact,
        }
    }

    /// Channel value as a whole percentage
    pub fn percent(&self, link: Link) -> u8 {
        self.channel(link).percent()
    }

    /// Filled height of a `max_height` pixel bar for one channel
    pub fn pixel_height(&self, link: Link, max_height: u16) -> u16 {
        self.channel(link).pixel_height(max_height)
    }

    /// Wireless health as a whole percentage
    pub fn wireless_percent(&self) -> u8 {
        self.percent(Link::Wireless)
    }

    /// Contact health as a whole percentage
    pub fn contact_percent(&self) -> u8 {
        self.percent(Link::Contact)
    }
}

impl HealthEvents for HealthModel {
    fn reset_wireless(&mut self, at_ms: u64) {
        self.reset(Link::Wireless, at_ms);
    }

    fn reset_contact(&mut self, at_ms: u64) {
        self.reset(Link::Contact, at_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::events::{split, HealthEventQueue};

    fn model() -> HealthModel {
        HealthModel::new(&HealthConfig::default(), 0)
    }

    #[test]
    fn test_channels_are_independent() {
        let mut health = model();
        health.update(5_000);
        assert_eq!(health.wireless_percent(), 50);
        assert_eq!(health.contact_percent(), 83);

        health.reset_wireless(5_000);
        health.update(5_000);
        assert_eq!(health.wireless_percent(), 100);
        assert_eq!(health.contact_percent(), 83);
    }

    #[test]
    fn test_full_at_boot() {
        let mut health = model();
        health.update(0);
        assert_eq!(health.percent(Link::Wireless), 100);
        assert_eq!(health.percent(Link::Contact), 100);
        assert_eq!(health.pixel_height(Link::Wireless, 32), 32);
    }

    #[test]
    fn test_depletes_at_timeout() {
        let mut health = model();
        health.update(10_000);
        assert!(health.channel(Link::Wireless).is_depleted());
        assert!(!health.channel(Link::Contact).is_depleted());

        health.update(30_000);
        assert!(health.channel(Link::Contact).is_depleted());
    }

    #[test]
    fn test_reset_contact_refills() {
        let mut health = model();
        health.update(29_000);
        health.reset_contact(29_000);
        health.update(29_000);
        assert_eq!(health.contact_percent(), 100);
    }

    #[test]
    fn test_apply_events_uses_event_stamps() {
        let mut queue = HealthEventQueue::<4>::new();
        let (mut tx, mut rx) = split(&mut queue);
        let mut health = model();

        tx.reset_wireless(4_000);
        tx.reset_contact(6_000);
        assert_eq!(health.apply_events(&mut rx), 2);
        assert_eq!(health.apply_events(&mut rx), 0);

        health.update(9_000);
        // 5 s since the sync, 3 s since the contact
        assert_eq!(health.wireless_percent(), 50);
        assert_eq!(health.contact_percent(), 90);
    }

    #[test]
    fn test_late_queued_event_does_not_refill() {
        let mut queue = HealthEventQueue::<4>::new();
        let (mut tx, mut rx) = split(&mut queue);
        let mut health = model();

        health.reset_wireless(8_000);
        health.update(9_000);
        assert_eq!(health.wireless_percent(), 90);

        // Delivered after a newer reset
        tx.reset_wireless(2_000);
        assert_eq!(health.apply_events(&mut rx), 1);
        assert_eq!(health.wireless_percent(), 90);
        assert_eq!(health.channel(Link::Wireless).last_event_ms(), 8_000);
    }
}
