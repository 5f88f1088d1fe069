use crate::PageMetrics;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// The settled index is authoritative; no programmatic scroll in flight.
    Idle,
    /// A programmatic scroll was issued and has not been confirmed settled.
    Scrolling,
}

/// Reconciles the externally requested index with the physically settled one.
///
/// Exactly one transition reports an index change to the caller: a settle
/// event that arrives while `Idle` and lands on a different page (a user
/// swipe the engine never asked for). Programmatic scrolls never report;
/// the caller initiated them and already knows.
#[derive(Clone, Debug)]
pub(crate) struct IndexReconciler {
    metrics: PageMetrics,
    count: usize,
    requested: usize,
    settled: usize,
    phase: Phase,
}

impl IndexReconciler {
    pub(crate) fn new(metrics: PageMetrics, count: usize, initial_index: usize) -> Self {
        let settled = match count {
            0 => 0,
            n => initial_index.min(n - 1),
        };
        Self {
            metrics,
            count,
            requested: settled,
            settled,
            phase: Phase::Idle,
        }
    }

    /// Requests that `index` become the visible page.
    ///
    /// Returns the offset the surface should animate to, or `None` when no
    /// scroll is needed (empty list, or already settled on that page).
    /// Out-of-range requests clamp to the nearest bound, never wrap. A
    /// request while a scroll is in flight supersedes it: the caller gets a
    /// fresh target and retargets its animation, no queueing.
    pub(crate) fn request(&mut self, index: usize) -> Option<u64> {
        if self.count == 0 {
            return None;
        }
        let index = index.min(self.count - 1);
        self.requested = index;
        if self.phase == Phase::Idle && index == self.settled {
            return None;
        }
        self.phase = Phase::Scrolling;
        Some(self.metrics.offset_for_index(index))
    }

    /// Feeds a scroll-settle event from the surface.
    ///
    /// Returns `Some(new_index)` only on the user-gesture path: settled while
    /// `Idle` on a page other than the current one. At most once per event.
    pub(crate) fn settle(&mut self, offset: u64) -> Option<usize> {
        let observed = self.metrics.index_for_offset(offset, self.count)?;
        match self.phase {
            Phase::Scrolling => {
                // Trust the physical outcome even when it disagrees with
                // the request.
                self.settled = observed;
                self.requested = observed;
                self.phase = Phase::Idle;
                None
            }
            Phase::Idle if observed != self.settled => {
                // Keeping `requested` in sync stops the caller's echo of the
                // new index from triggering another scroll.
                self.settled = observed;
                self.requested = observed;
                Some(observed)
            }
            Phase::Idle => None,
        }
    }

    /// Re-clamps both indexes after the slide list is replaced.
    ///
    /// Returns to `Idle` without reporting: list-identity changes are not
    /// index-change events.
    pub(crate) fn resize(&mut self, count: usize) {
        self.count = count;
        self.phase = Phase::Idle;
        let max = count.saturating_sub(1);
        self.requested = self.requested.min(max);
        self.settled = self.settled.min(max);
    }

    pub(crate) fn set_metrics(&mut self, metrics: PageMetrics) {
        self.metrics = metrics;
    }

    pub(crate) fn requested(&self) -> usize {
        self.requested
    }

    pub(crate) fn settled(&self) -> usize {
        self.settled
    }

    pub(crate) fn is_scrolling(&self) -> bool {
        self.phase == Phase::Scrolling
    }

    /// Restores a previously captured paging snapshot.
    ///
    /// A snapshot taken mid-scroll restores to `Scrolling`, so the next
    /// settle event is treated as programmatic and stays silent.
    pub(crate) fn restore(&mut self, requested: usize, settled: usize, scrolling: bool) {
        let max = self.count.saturating_sub(1);
        self.requested = requested.min(max);
        self.settled = settled.min(max);
        self.phase = if scrolling && self.count > 0 {
            Phase::Scrolling
        } else {
            Phase::Idle
        };
    }
}
