//! Configuration type definitions
//!
//! These values are fixed for the lifetime of the process. Hosts may load
//! them from a file (see the `serde` feature); firmware builds usually use
//! the defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
        }
    }
}

/// Animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Minimum time between animation frame advances (ms)
    pub frame_interval_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 500,
        }
    }
}

/// Health decay timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealthConfig {
    /// Time without a wireless sync until the bar is empty (seconds)
    pub wireless_timeout_s: u16,
    /// Time without physical contact until the bar is empty (seconds)
    pub contact_timeout_s: u16,
}

impl HealthConfig {
    /// Wireless timeout in milliseconds
    pub const fn wireless_timeout_ms(&self) -> u32 {
        self.wireless_timeout_s as u32 * 1000
    }

    /// Contact timeout in milliseconds
    pub const fn contact_timeout_ms(&self) -> u32 {
        self.contact_timeout_s as u32 * 1000
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            wireless_timeout_s: 10,
            contact_timeout_s: 30,
        }
    }
}

/// Health bar and label layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HudConfig {
    /// Health bar width (pixels)
    pub bar_width: u8,
    /// Health bar track height (pixels)
    pub bar_height: u8,
    /// Top row of the state label (pixels)
    pub label_y: u8,
}

impl HudConfig {
    /// Top row of the bar tracks, vertically centered on the display
    pub const fn bar_origin_y(&self, display_height: u16) -> i32 {
        (display_height as i32 - self.bar_height as i32) / 2
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            bar_width: 4,
            bar_height: 32,
            label_y: 56,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    pub display: DisplayConfig,
    pub animation: AnimationConfig,
    pub health: HealthConfig,
    pub hud: HudConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Display width or height is zero
    ZeroDimension,
    /// Animation frame interval is zero
    ZeroFrameInterval,
    /// A health timeout is zero
    ZeroTimeout,
    /// Health bar does not fit vertically
    BarTooTall,
    /// Two health bars do not fit horizontally
    BarTooWide,
    /// Label row is below the display
    LabelOffscreen,
}

impl DeviceConfig {
    /// Check that the configuration describes a drawable layout
    pub fn validate(&self) -> Result<(), ConfigError> {
        let DisplayConfig { width, height } = self.display;

        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension);
        }

        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }

        if self.health.wireless_timeout_s == 0 || self.health.contact_timeout_s == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        if u16::from(self.hud.bar_height) > height {
            return Err(ConfigError::BarTooTall);
        }

        // One pixel margin on each outer edge plus both tracks
        if self.hud.bar_width == 0 || 2 * (u16::from(self.hud.bar_width) + 1) > width {
            return Err(ConfigError::BarTooWide);
        }

        if u16::from(self.hud.label_y) >= height {
            return Err(ConfigError::LabelOffscreen);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DeviceConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.display.width, 128);
        assert_eq!(config.display.height, 64);
        assert_eq!(config.health.wireless_timeout_ms(), 10_000);
        assert_eq!(config.health.contact_timeout_ms(), 30_000);
    }

    #[test]
    fn test_bar_origin_is_centered() {
        let hud = HudConfig::default();
        assert_eq!(hud.bar_origin_y(64), 16);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut config = DeviceConfig::default();
        config.display.height = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimension));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = DeviceConfig::default();
        config.animation.frame_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameInterval));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = DeviceConfig::default();
        config.health.contact_timeout_s = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_bar_layout_rejected() {
        let mut config = DeviceConfig::default();
        config.hud.bar_height = 65;
        assert_eq!(config.validate(), Err(ConfigError::BarTooTall));

        let mut config = DeviceConfig::default();
        config.display.width = 8;
        config.hud.bar_width = 4;
        assert_eq!(config.validate(), Err(ConfigError::BarTooWide));

        let mut config = DeviceConfig::default();
        config.hud.label_y = 64;
        assert_eq!(config.validate(), Err(ConfigError::LabelOffscreen));
    }
}
