//! Simulated radio and contact drivers

use pawlink_core::health::HealthEvents;

use crate::config::SimConfig;

/// One periodic signal source
#[derive(Debug, Clone, Copy)]
struct Periodic {
    period_ms: u64,
    /// No signal at or after this time
    until_ms: Option<u64>,
    next_ms: u64,
}

impl Periodic {
    fn new(period_ms: u64, until_ms: Option<u64>, start_ms: u64) -> Self {
        Self {
            period_ms,
            until_ms,
            next_ms: start_ms.saturating_add(period_ms),
        }
    }

    /// Time of the signal due at `now_ms`, if any
    fn poll(&mut self, now_ms: u64) -> Option<u64> {
        if self.period_ms == 0 || now_ms < self.next_ms {
            return None;
        }

        // Missed periods collapse into the latest one
        while self.next_ms + self.period_ms <= now_ms {
            self.next_ms += self.period_ms;
        }
        if self.until_ms.is_some_and(|until| self.next_ms >= until) {
            return None;
        }

        let at_ms = self.next_ms;
        self.next_ms += self.period_ms;
        Some(at_ms)
    }
}

/// Stand-in for the radio and contact sensor drivers
pub struct SignalFeeds {
    wireless: Periodic,
    contact: Periodic,
}

impl SignalFeeds {
    pub fn new(config: &SimConfig, start_ms: u64) -> Self {
        let cutoff = (config.wireless_cutoff_s > 0)
            .then(|| start_ms.saturating_add(config.wireless_cutoff_s * 1000));
        Self {
            wireless: Periodic::new(config.wireless_period_ms, cutoff, start_ms),
            contact: Periodic::new(config.contact_period_ms, None, start_ms),
        }
    }

    /// Report every signal due at `now_ms` to `sink`
    pub fn poll<E: HealthEvents>(&mut self, now_ms: u64, sink: &mut E) {
        if let Some(at_ms) = self.wireless.poll(now_ms) {
            log::debug!("simulated sync at {} ms", at_ms);
            sink.reset_wireless(at_ms);
        }
        if let Some(at_ms) = self.contact.poll(now_ms) {
            log::debug!("simulated contact at {} ms", at_ms);
            sink.reset_contact(at_ms);
        }
    }
}
