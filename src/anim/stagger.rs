//! Stagger - entrance transitions with index-proportional delay
//!
//! Each grid item gets a one-shot visibility trigger; when it fires, the
//! entrance is scheduled `base + index * per_item` milliseconds later. The
//! delay depends only on the item's pre-assigned index, never on the order
//! visibility events arrive, so a whole row entering the viewport in one
//! observation batch still reveals left to right.

/// Tracks which items have fired and computes their entrance delays.
#[derive(Debug)]
pub struct StaggerSequencer {
    base_delay_ms: u32,
    per_item_delay_ms: u32,
    fired: Vec<bool>,
}

impl StaggerSequencer {
    pub fn new(count: usize, base_delay_ms: u32, per_item_delay_ms: u32) -> Self {
        Self {
            base_delay_ms,
            per_item_delay_ms,
            fired: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }

    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }

    /// Delay for an item, measured from its firing moment.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.base_delay_ms + index as u32 * self.per_item_delay_ms
    }

    /// Record that an item became visible. Returns its entrance delay the
    /// first time only; repeated intersection events and out-of-range
    /// indices yield `None`.
    pub fn mark_visible(&mut self, index: usize) -> Option<u32> {
        let slot = self.fired.get_mut(index)?;
        if *slot {
            return None;
        }
        *slot = true;
        Some(self.delay_for(index))
    }

    pub fn all_fired(&self) -> bool {
        self.fired.iter().all(|f| *f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_proportional_to_index() {
        let seq = StaggerSequencer::new(4, 0, 100);
        assert_eq!(seq.delay_for(0), 0);
        assert_eq!(seq.delay_for(3), 300);

        let delayed = StaggerSequencer::new(4, 1000, 200);
        assert_eq!(delayed.delay_for(2), 1400);
    }

    #[test]
    fn fires_at_most_once_per_item() {
        let mut seq = StaggerSequencer::new(3, 0, 150);
        assert_eq!(seq.mark_visible(1), Some(150));
        assert_eq!(seq.mark_visible(1), None);
        assert!(seq.has_fired(1));
        assert!(!seq.has_fired(0));
    }

    #[test]
    fn batch_order_does_not_affect_delays() {
        // Items 0..3 delivered in reverse order, as a same-batch observer
        // callback might.
        let mut seq = StaggerSequencer::new(4, 0, 100);
        let delays: Vec<_> = [3, 2, 1, 0]
            .into_iter()
            .map(|i| (i, seq.mark_visible(i).unwrap()))
            .collect();
        for (i, delay) in delays {
            assert_eq!(delay, i as u32 * 100);
        }
        assert!(seq.all_fired());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut seq = StaggerSequencer::new(2, 0, 100);
        assert_eq!(seq.mark_visible(5), None);
    }
}
