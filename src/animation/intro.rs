use rand::Rng;

use super::transition::TransitionPhase;
use crate::options::RandomizeRange;
use crate::scene::DisplayEntry;

/// Grid intro randomization with a generation counter and a pending flag.
///
/// [`begin`](Self::begin) starts a new generation. Each
/// [`trigger`](Self::trigger) randomizes every loaded entry that has not
/// been randomized for the current generation and re-marks the others as
/// settling. While some slot is still empty the sequencer stays pending,
/// so the next load completion can call `trigger` again.
#[derive(Debug, Clone, Default)]
pub struct IntroSequencer {
    generation: u64,
    pending: bool,
}

impl IntroSequencer {
    /// Start a new intro generation.
    pub fn begin(&mut self) {
        self.generation += 1;
        self.pending = true;
        log::debug!("grid intro generation {}", self.generation);
    }

    /// Current generation (0 before the first intro).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether some entries still await randomization.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Randomize loaded slots for the current generation.
    ///
    /// Returns how many entries received a fresh random pose.
    pub fn trigger<R: Rng>(
        &mut self,
        slots: &mut [Option<DisplayEntry>],
        range: &RandomizeRange,
        rng: &mut R,
    ) -> usize {
        if !self.pending {
            return 0;
        }
        let mut awaiting = false;
        let mut randomized = 0;
        for slot in slots.iter_mut() {
            let Some(entry) = slot else {
                awaiting = true;
                continue;
            };
            if entry.transition.generation == Some(self.generation) {
                entry.transition.phase = TransitionPhase::Settling;
                continue;
            }
            entry
                .transition
                .randomize(&mut entry.rotation, range, rng);
            entry.transition.generation = Some(self.generation);
            randomized += 1;
        }
        if !awaiting {
            self.pending = false;
        }
        randomized
    }
}
