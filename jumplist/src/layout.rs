use alloc::vec::Vec;

use crate::{SectionId, SectionedData};

/// Fixed heights used to estimate offsets without measuring anything.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimateMetrics {
    /// Height of any fixed leading header above the first section.
    pub header_offset: f32,
    pub section_header_height: f32,
    pub cell_height: f32,
}

/// Section order and item counts of the current data set, with prefix sums over item counts.
///
/// The estimated start of section `i` is
/// `header_offset + i * section_header_height + items_before(i) * cell_height`, i.e. every
/// preceding section contributes its header plus its rows. Empty sections still contribute a
/// header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionLayout {
    sections: Vec<(SectionId, usize)>,
    // items_before[i] = number of rows in sections[..i]; one extra trailing entry holds the total.
    items_before: Vec<u64>,
}

impl SectionLayout {
    pub fn new(sections: impl IntoIterator<Item = (SectionId, usize)>) -> Self {
        let sections: Vec<(SectionId, usize)> = sections.into_iter().collect();
        let mut items_before = Vec::with_capacity(sections.len() + 1);
        let mut acc = 0u64;
        items_before.push(acc);
        for &(_, count) in &sections {
            acc = acc.saturating_add(count as u64);
            items_before.push(acc);
        }
        Self {
            sections,
            items_before,
        }
    }

    pub fn from_data<T>(data: &SectionedData<T>) -> Self {
        Self::new(data.sections().iter().map(|s| (s.id, s.len())))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|&(id, _)| id)
    }

    /// Position of `section` in map order.
    pub fn position(&self, section: SectionId) -> Option<usize> {
        self.sections.iter().position(|&(id, _)| id == section)
    }

    pub fn contains(&self, section: SectionId) -> bool {
        self.position(section).is_some()
    }

    pub fn item_count(&self, section: SectionId) -> Option<usize> {
        let pos = self.position(section)?;
        Some(self.sections[pos].1)
    }

    /// Number of rows in all sections preceding `section`.
    pub fn items_before(&self, section: SectionId) -> Option<u64> {
        let pos = self.position(section)?;
        Some(self.items_before[pos])
    }

    pub fn total_items(&self) -> u64 {
        self.items_before.last().copied().unwrap_or(0)
    }

    pub fn estimated_offset(&self, section: SectionId, metrics: EstimateMetrics) -> Option<f32> {
        let pos = self.position(section)?;
        Some(self.start_at(pos, metrics))
    }

    /// Estimated content height, including the leading header.
    pub fn estimated_total(&self, metrics: EstimateMetrics) -> f32 {
        self.start_at(self.sections.len(), metrics)
    }

    /// The last section whose estimated start is at or before `offset`.
    pub fn section_at_offset(&self, offset: f32, metrics: EstimateMetrics) -> Option<SectionId> {
        if self.sections.is_empty() {
            return None;
        }
        // Starts are non-decreasing: find the first one past `offset`.
        let mut lo = 0usize;
        let mut hi = self.sections.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.start_at(mid, metrics) <= offset {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        Some(self.sections[lo.saturating_sub(1)].0)
    }

    fn start_at(&self, pos: usize, metrics: EstimateMetrics) -> f32 {
        let headers = pos as f32 * metrics.section_header_height;
        let rows = self.items_before[pos] as f32 * metrics.cell_height;
        metrics.header_offset + headers + rows
    }
}
