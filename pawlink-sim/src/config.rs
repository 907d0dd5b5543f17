//! Simulator configuration
//!
//! Loads `pawlink.toml`. Every table is optional; missing keys keep their
//! defaults. A missing file runs the simulator with the built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use log::{info, warn};
use serde::Deserialize;

use pawlink_core::config::{
    AnimationConfig, DeviceConfig, DisplayConfig, HealthConfig, HudConfig,
};
use pawlink_display::{HEIGHT, WIDTH};

/// Configuration file used when no path is given
pub const DEFAULT_PATH: &str = "pawlink.toml";

/// Simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Loop period (ms)
    pub tick_ms: u64,
    /// Run time before exiting (s, 0 = run forever)
    pub duration_s: u64,
    /// Period of simulated wireless syncs (ms, 0 = never)
    pub wireless_period_ms: u64,
    /// Stop sending syncs after this long (s, 0 = never stop)
    pub wireless_cutoff_s: u64,
    /// Period of simulated contact pulses (ms, 0 = never)
    pub contact_period_ms: u64,
    /// Print each presented frame to the terminal
    pub render: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            duration_s: 60,
            wireless_period_ms: 4_000,
            wireless_cutoff_s: 30,
            contact_period_ms: 20_000,
            render: true,
        }
    }
}

/// Contents of `pawlink.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimFile {
    pub display: DisplayConfig,
    pub animation: AnimationConfig,
    pub health: HealthConfig,
    pub hud: HudConfig,
    pub sim: SimConfig,
}

impl SimFile {
    /// The device part of the file
    pub fn device(&self) -> DeviceConfig {
        DeviceConfig {
            display: self.display,
            animation: self.animation,
            health: self.health,
            hud: self.hud,
        }
    }
}

/// Parse and validate configuration text
pub fn parse(text: &str) -> Result<SimFile> {
    let file: SimFile = toml::from_str(text).context("invalid TOML")?;

    file.device()
        .validate()
        .map_err(|e| anyhow!("invalid device configuration: {:?}", e))?;

    if usize::from(file.display.width) != WIDTH || usize::from(file.display.height) != HEIGHT {
        bail!(
            "display must be {}x{}, got {}x{}",
            WIDTH,
            HEIGHT,
            file.display.width,
            file.display.height
        );
    }

    if file.sim.tick_ms == 0 {
        bail!("sim.tick_ms must be non-zero");
    }

    Ok(file)
}

/// Load configuration from `path`, falling back to defaults if it is missing
pub fn load(path: &Path) -> Result<SimFile> {
    if !path.exists() {
        warn!("{} not found, using defaults", path.display());
        return Ok(SimFile::default());
    }

    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file = parse(&text).with_context(|| format!("loading {}", path.display()))?;
    info!("loaded configuration from {}", path.display());
    Ok(file)
}
