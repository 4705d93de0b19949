//! Display entries for every loaded model instance.
//!
//! Each manifest model gets one solo slot and one grid slot. Slots stay
//! empty until the host reports the mesh as loaded; the animator skips
//! empty slots. Visibility of the two sets is mutually exclusive.

mod entry;
mod fit;

pub use entry::{DisplayContext, DisplayEntry, LoadedMesh, NodeHandle};
pub use fit::{MeshBounds, MeshFit};

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Slots for the solo and grid display sets, indexed by manifest order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    solo: Vec<Option<DisplayEntry>>,
    grid: Vec<Option<DisplayEntry>>,
    /// Bumped whenever visibility changes.
    generation: u64,
}

impl Scene {
    /// Empty slots for `model_count` models.
    #[must_use]
    pub fn new(model_count: usize) -> Self {
        Self {
            solo: vec![None; model_count],
            grid: vec![None; model_count],
            generation: 0,
        }
    }

    /// Number of models (slots per context).
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.solo.len()
    }

    /// Visibility generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store a loaded entry. Returns `false` if its index is out of range.
    pub fn install(&mut self, entry: DisplayEntry) -> bool {
        let index = entry.model_index;
        let Some(slot) = self.slots_mut(entry.context).get_mut(index) else {
            return false;
        };
        *slot = Some(entry);
        self.generation += 1;
        true
    }

    /// Slots of one context.
    #[must_use]
    pub fn slots(&self, context: DisplayContext) -> &[Option<DisplayEntry>] {
        match context {
            DisplayContext::Solo => &self.solo,
            DisplayContext::Grid => &self.grid,
        }
    }

    /// Mutable slots of one context.
    pub fn slots_mut(
        &mut self,
        context: DisplayContext,
    ) -> &mut [Option<DisplayEntry>] {
        match context {
            DisplayContext::Solo => &mut self.solo,
            DisplayContext::Grid => &mut self.grid,
        }
    }

    /// Loaded entry for a model, if present.
    #[must_use]
    pub fn entry(
        &self,
        context: DisplayContext,
        index: usize,
    ) -> Option<&DisplayEntry> {
        self.slots(context).get(index).and_then(Option::as_ref)
    }

    /// Mutable loaded entry for a model, if present.
    pub fn entry_mut(
        &mut self,
        context: DisplayContext,
        index: usize,
    ) -> Option<&mut DisplayEntry> {
        self.slots_mut(context)
            .get_mut(index)
            .and_then(Option::as_mut)
    }

    /// All loaded entries of both contexts.
    pub fn entries(&self) -> impl Iterator<Item = &DisplayEntry> {
        self.solo.iter().chain(self.grid.iter()).flatten()
    }

    /// Loaded entries of one context.
    pub fn loaded(
        &mut self,
        context: DisplayContext,
    ) -> impl Iterator<Item = &mut DisplayEntry> {
        self.slots_mut(context).iter_mut().flatten()
    }

    /// Solo mode: only the solo entry at `index` is visible.
    pub fn show_solo(&mut self, index: usize) {
        for entry in self.grid.iter_mut().flatten() {
            entry.visible = false;
        }
        for entry in self.solo.iter_mut().flatten() {
            entry.visible = entry.model_index == index;
        }
        self.generation += 1;
    }

    /// Grid mode: every grid entry is visible, every solo entry hidden.
    pub fn show_grid(&mut self) {
        for entry in self.solo.iter_mut().flatten() {
            entry.visible = false;
        }
        for entry in self.grid.iter_mut().flatten() {
            entry.visible = true;
        }
        self.generation += 1;
    }

    /// Indices of visible entries in a context.
    #[must_use]
    pub fn visible_indices(&self, context: DisplayContext) -> Vec<usize> {
        self.slots(context)
            .iter()
            .flatten()
            .filter(|e| e.visible)
            .map(|e| e.model_index)
            .collect()
    }
}
