//! Single health channel
//!
//! A channel tracks how long ago its signal was last seen. The value is
//! recomputed from that timestamp on every update instead of being
//! decremented per tick, so it does not depend on the tick rate and is
//! unaffected by missed ticks.

/// Which external signal a channel tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Link {
    /// Wireless synchronization packets
    Wireless,
    /// Physical contact pulses
    Contact,
}

impl Link {
    /// Short lowercase name for logging
    pub const fn name(self) -> &'static str {
        match self {
            Link::Wireless => "wireless",
            Link::Contact => "contact",
        }
    }
}

/// Full health value
pub const HEALTH_MAX: f32 = 100.0;

/// Linearly decaying health value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HealthChannel {
    /// Current value in [0, 100] as of the last update
    value: f32,
    /// Timestamp of the last reset (ms)
    last_event_ms: u64,
    /// Time from full to empty (ms)
    timeout_ms: u32,
}

impl HealthChannel {
    /// Create a full channel
    ///
    /// A zero timeout is treated as 1 ms.
    pub fn new(timeout_ms: u32, now_ms: u64) -> Self {
        Self {
            value: HEALTH_MAX,
            last_event_ms: now_ms,
            timeout_ms: timeout_ms.max(1),
        }
    }

    /// Refill the channel; the signal was seen at `at_ms`
    ///
    /// A stamp older than the last reset is ignored.
    pub fn reset(&mut self, at_ms: u64) {
        if at_ms < self.last_event_ms {
            return;
        }
        self.value = HEALTH_MAX;
        self.last_event_ms = at_ms;
    }

    /// Recompute the value for the clock reading `now_ms`
    ///
    /// Idempotent for a fixed reading. Readings before the last reset count
    /// as zero elapsed time.
    pub fn update(&mut self, now_ms: u64) {
        let elapsed = self.elapsed_ms(now_ms) as f32;
        let remaining = HEALTH_MAX - HEALTH_MAX * elapsed / self.timeout_ms as f32;
        self.value = if remaining > 0.0 { remaining } else { 0.0 };
    }

    /// Current value in [0, 100]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current value truncated to a whole percentage
    pub fn percent(&self) -> u8 {
        self.value as u8
    }

    /// Filled height of a bar `max_height` pixels tall
    pub fn pixel_height(&self, max_height: u16) -> u16 {
        let filled = (self.value / HEALTH_MAX * f32::from(max_height)) as u16;
        filled.min(max_height)
    }

    /// Check if the channel has decayed to zero
    pub fn is_depleted(&self) -> bool {
        self.value <= 0.0
    }

    /// Time since the last reset as seen at `now_ms`
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_event_ms)
    }

    /// Timestamp of the last reset (ms)
    pub fn last_event_ms(&self) -> u64 {
        self.last_event_ms
    }

    /// Time from full to empty (ms)
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}
