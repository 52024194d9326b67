//! Stat-comparison selection.

use serde::{Deserialize, Serialize};

/// Hard bounds on how many entries can be compared side by side.
pub const MIN_COMPARISON: usize = 2;
pub const MAX_COMPARISON: usize = 6;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonMode {
    Stats,
    Types,
    Abilities,
    Moves,
    #[default]
    All,
}

/// Which Pokédex entries are selected for comparison, and how they are
/// being compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSet {
    selected: Vec<u32>,
    max_selection: usize,
    comparing: bool,
    mode: ComparisonMode,
}

impl Default for ComparisonSet {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
            max_selection: MAX_COMPARISON,
            comparing: false,
            mode: ComparisonMode::default(),
        }
    }
}

impl ComparisonSet {
    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    pub fn is_comparing(&self) -> bool {
        self.comparing
    }

    pub fn max_selection(&self) -> usize {
        self.max_selection
    }

    /// Adding past the cap, or an id already selected, is a silent no-op.
    /// Returns whether the selection changed.
    pub fn add(&mut self, dex_id: u32) -> bool {
        if self.selected.len() >= self.max_selection || self.selected.contains(&dex_id) {
            return false;
        }
        self.selected.push(dex_id);
        true
    }

    /// Returns whether the selection changed.
    pub fn remove(&mut self, dex_id: u32) -> bool {
        let before = self.selected.len();
        self.selected.retain(|&id| id != dex_id);
        self.selected.len() != before
    }

    /// Clears the selection and leaves comparison mode.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty() || self.comparing;
        self.selected.clear();
        self.comparing = false;
        had_any
    }

    pub fn set_mode(&mut self, mode: ComparisonMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn toggle_comparing(&mut self) {
        self.comparing = !self.comparing;
    }

    /// The cap is clamped to [2, 6]; a lower cap does not evict entries
    /// already selected.
    pub fn set_max_selection(&mut self, max: usize) -> bool {
        let clamped = max.clamp(MIN_COMPARISON, MAX_COMPARISON);
        let changed = self.max_selection != clamped;
        self.max_selection = clamped;
        changed
    }
}
