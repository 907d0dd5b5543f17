//! Animation and redraw scheduler
//!
//! One [`Scheduler::tick`] per loop iteration. Frame advance is gated by
//! elapsed clock time, redraw by the pet's dirty flag. Health decay is
//! recomputed on every tick regardless of either gate.

use crate::config::{DeviceConfig, HudConfig};
use crate::health::HealthModel;
use crate::render::Compositor;
use crate::sprite::SpriteStore;
use crate::traits::{Clock, PetState, Surface};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// The animation frame advanced
    pub advanced: bool,
    /// The surface was redrawn and flushed
    pub redrawn: bool,
}

/// Animation and redraw scheduler
pub struct Scheduler<'a, C: Clock> {
    clock: C,
    sprites: &'a SpriteStore,
    frame_interval_ms: u32,
    hud: HudConfig,
    /// Clock reading at the last frame advance
    last_advance_ms: u64,
}

impl<'a, C: Clock> Scheduler<'a, C> {
    /// Create a scheduler; the frame interval starts counting now
    pub fn new(clock: C, sprites: &'a SpriteStore, config: &DeviceConfig) -> Self {
        let last_advance_ms = clock.now_ms();
        Self {
            clock,
            sprites,
            frame_interval_ms: config.animation.frame_interval_ms,
            hud: config.hud,
            last_advance_ms,
        }
    }

    /// Run one scheduling step
    ///
    /// Advances the animation if at least one frame interval has passed,
    /// updates `health` if present, and redraws only when `pet` is dirty.
    pub fn tick<S, P>(
        &mut self,
        surface: &mut S,
        pet: &mut P,
        health: Option<&mut HealthModel>,
    ) -> TickOutcome
    where
        S: Surface + ?Sized,
        P: PetState + ?Sized,
    {
        let now_ms = self.clock.now_ms();
        let elapsed_ms = now_ms.saturating_sub(self.last_advance_ms);

        let advanced = elapsed_ms >= u64::from(self.frame_interval_ms);
        if advanced {
            pet.advance_frame();
            self.last_advance_ms = now_ms;
            trace!("frame {} after {} ms", pet.frame_index(), elapsed_ms);
        }

        let health = health.map(|model| {
            model.update(now_ms);
            &*model
        });

        let redrawn = pet.is_dirty();
        if redrawn {
            self.draw_frame(surface, pet, health);
        }

        TickOutcome { advanced, redrawn }
    }

    /// Draw and present one complete frame, then clear the dirty flag
    ///
    /// Does not update `health`; callers outside [`tick`](Self::tick)
    /// should update it first.
    pub fn draw_frame<S, P>(&self, surface: &mut S, pet: &mut P, health: Option<&HealthModel>)
    where
        S: Surface + ?Sized,
        P: PetState + ?Sized,
    {
        let state = pet.state_name();
        let frame = self.sprites.get(state, pet.frame_index());
        trace!("redraw '{}' frame {}", state, pet.frame_index());

        let mut compositor = Compositor::new(surface);
        compositor.clear();
        compositor.blit_centered(&frame);
        if let Some(health) = health {
            compositor.draw_health(health, &self.hud);
        }
        compositor.draw_label(state, i32::from(self.hud.label_y));
        compositor.flush();

        pet.clear_dirty();
    }

    /// Clock reading at the last frame advance
    pub fn last_advance_ms(&self) -> u64 {
        self.last_advance_ms
    }
}
