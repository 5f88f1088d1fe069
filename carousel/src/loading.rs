use crate::LoadPhase;
use crate::key::{LoadPhaseMap, LoadStateKey};

/// Per-slide image load lifecycle, keyed by slide identity.
///
/// Keying by identity rather than slot position makes "the image reference
/// for a slot changed" structural: the new reference is a new key with no
/// recorded phase, so the slot starts over when the surface reports the next
/// load start. State is ephemeral: cleared on full list replacement.
#[derive(Clone, Debug)]
pub(crate) struct LoadTracker<K> {
    phases: LoadPhaseMap<K>,
}

impl<K: LoadStateKey> LoadTracker<K> {
    pub(crate) fn new() -> Self {
        Self {
            phases: LoadPhaseMap::<K>::new(),
        }
    }

    /// Marks a load attempt as started. Restarts `Ready` and `Failed` slots,
    /// so a retry goes back to showing the spinner.
    pub(crate) fn begin(&mut self, key: K) {
        self.phases.insert(key, LoadPhase::Loading);
    }

    /// Marks the slot's image as ready. Idempotent.
    pub(crate) fn complete(&mut self, key: K) {
        self.phases.insert(key, LoadPhase::Ready);
    }

    pub(crate) fn fail(&mut self, key: K) {
        self.phases.insert(key, LoadPhase::Failed);
    }

    pub(crate) fn phase(&self, key: &K) -> Option<LoadPhase> {
        self.phases.get(key).copied()
    }

    pub(crate) fn is_loading(&self, key: &K) -> bool {
        self.phase(key) == Some(LoadPhase::Loading)
    }

    pub(crate) fn is_ready(&self, key: &K) -> bool {
        self.phase(key) == Some(LoadPhase::Ready)
    }

    pub(crate) fn is_failed(&self, key: &K) -> bool {
        self.phase(key) == Some(LoadPhase::Failed)
    }

    pub(crate) fn clear(&mut self) {
        self.phases.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.phases.len()
    }
}
