//! Frame time to fixed tick conversion

use crate::consts::{MAX_SUBSTEPS, TICK_MS};

/// Accumulates real frame time and hands out whole simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FixedCadence {
    accumulator: f32,
}

impl FixedCadence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed `elapsed_ms` of wall time, get the number of ticks to run
    ///
    /// Long frames (tab switches) are capped so the simulation never tries to
    /// catch up by more than `MAX_SUBSTEPS` ticks.
    pub fn ticks(&mut self, elapsed_ms: f32) -> u32 {
        let elapsed_ms = if elapsed_ms.is_finite() {
            elapsed_ms.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.accumulator += elapsed_ms;

        let mut substeps = 0;
        while self.accumulator >= TICK_MS && substeps < MAX_SUBSTEPS {
            self.accumulator -= TICK_MS;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than carry it into the next frame
            self.accumulator = self.accumulator.min(TICK_MS);
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
