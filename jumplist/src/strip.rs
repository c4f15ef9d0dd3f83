use crate::{GestureState, SectionId, SectionSet, StripMetrics};

/// A section picked on the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripSelection {
    pub section: SectionId,
    /// `false` when the selection was issued programmatically.
    pub from_touch: bool,
}

/// The alphabetic jump strip.
///
/// The strip always shows the full [`SectionId`] universe as equally sized items; the container
/// is the only touch target. Touch positions are mapped to an index with the strip's measured
/// [`StripMetrics`] (unknown until the first layout resolves; touches before that are ignored).
///
/// Touching the band of a section without entries resolves to the nearest non-empty section
/// above it, or to the first section if every section above is empty too.
#[derive(Clone, Debug, Default)]
pub struct IndexStrip {
    metrics: Option<StripMetrics>,
    occupied: SectionSet,
    gesture: GestureState,
}

impl IndexStrip {
    pub fn new(occupied: SectionSet) -> Self {
        Self {
            metrics: None,
            occupied,
            gesture: GestureState::new(),
        }
    }

    /// Items to render, in order.
    pub fn items(&self) -> [SectionId; SectionId::COUNT] {
        SectionId::ALL
    }

    pub fn metrics(&self) -> Option<StripMetrics> {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: StripMetrics) {
        if !metrics.is_usable() {
            jwarn!(
                origin_y = metrics.origin_y,
                item_height = metrics.item_height,
                "ignoring unusable strip metrics"
            );
            return;
        }
        jdebug!(
            origin_y = metrics.origin_y,
            item_height = metrics.item_height,
            "strip metrics resolved"
        );
        self.metrics = Some(metrics);
    }

    pub fn clear_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn occupied(&self) -> SectionSet {
        self.occupied
    }

    pub fn set_occupied(&mut self, occupied: SectionSet) {
        self.occupied = occupied;
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Index of the band under `y`, clamped into the strip. `None` until metrics are known.
    pub fn raw_index(&self, y: f32) -> Option<usize> {
        let metrics = self.metrics?;
        if !y.is_finite() {
            return None;
        }
        let dy = y - metrics.origin_y;
        if dy <= 0.0 {
            return Some(0);
        }
        // Truncation is floor for non-negative values; `as` saturates on overflow.
        let index = (dy / metrics.item_height) as usize;
        Some(index.min(SectionId::COUNT - 1))
    }

    /// Walks backward from `index` past sections without entries. Never walks forward and never
    /// goes below 0.
    pub fn resolve_index(&self, index: usize) -> usize {
        let mut index = index.min(SectionId::COUNT - 1);
        while index > 0 && !self.occupied.contains(SectionId::ALL[index]) {
            index -= 1;
        }
        index
    }

    /// The section a touch at `y` resolves to, without touching gesture state.
    pub fn section_at(&self, y: f32) -> Option<SectionId> {
        let raw = self.raw_index(y)?;
        Some(SectionId::ALL[self.resolve_index(raw)])
    }

    pub fn on_touch_start(&mut self, y: f32) -> Option<StripSelection> {
        self.gesture.reset();
        self.track(y)
    }

    pub fn on_touch_move(&mut self, y: f32) -> Option<StripSelection> {
        self.track(y)
    }

    pub fn on_touch_end(&mut self) {
        self.gesture.reset();
    }

    /// A selection that did not come from a touch. Always emitted; ends any gesture in progress.
    pub fn select(&mut self, section: SectionId) -> StripSelection {
        self.gesture.reset();
        StripSelection {
            section,
            from_touch: false,
        }
    }

    fn track(&mut self, y: f32) -> Option<StripSelection> {
        let section = self.section_at(y)?;
        if !self.gesture.admit(section) {
            return None;
        }
        jtrace!(y, section = section.as_str(), "strip selection");
        Some(StripSelection {
            section,
            from_touch: true,
        })
    }
}
