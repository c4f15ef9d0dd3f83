use alloc::vec::Vec;

use crate::{SectionId, SectionSet};

/// One section of a sectioned list: its id plus its items, in display order.
///
/// A section with zero items is legal. It still gets a header, but the strip skips over it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section<T> {
    pub id: SectionId,
    pub items: Vec<T>,
}

impl<T> Section<T> {
    pub fn new(id: SectionId, items: Vec<T>) -> Self {
        Self { id, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The data handed to a sectioned list, resolved once at the boundary.
///
/// `Sectioned` holds at most one section per id; the constructors below enforce this by merging
/// duplicate keys into their first occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionedData<T> {
    /// A plain sequence. No section headers, no index strip.
    Flat(Vec<T>),
    /// An ordered mapping from section id to items.
    Sectioned(Vec<Section<T>>),
}

impl<T> Default for SectionedData<T> {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl<T> SectionedData<T> {
    pub fn flat(items: impl IntoIterator<Item = T>) -> Self {
        Self::Flat(items.into_iter().collect())
    }

    /// Builds a sectioned data set, keeping the order in which keys first appear.
    pub fn sectioned<I>(sections: impl IntoIterator<Item = (SectionId, I)>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut out: Vec<Section<T>> = Vec::new();
        for (id, items) in sections {
            match out.iter_mut().find(|s| s.id == id) {
                Some(existing) => existing.items.extend(items),
                None => out.push(Section::new(id, items.into_iter().collect())),
            }
        }
        Self::Sectioned(out)
    }

    /// Buckets items by the first character of `label(item)`, in strip order (`A`..`Z`, `#`).
    ///
    /// Only non-empty sections are created; items keep their relative order inside a bucket.
    pub fn group_by_initial(
        items: impl IntoIterator<Item = T>,
        mut label: impl FnMut(&T) -> &str,
    ) -> Self {
        let mut buckets: Vec<Vec<T>> = (0..SectionId::COUNT).map(|_| Vec::new()).collect();
        for item in items {
            let id = SectionId::for_label(label(&item));
            buckets[id.index()].push(item);
        }
        Self::Sectioned(
            SectionId::iter()
                .zip(buckets)
                .filter(|(_, items)| !items.is_empty())
                .map(|(id, items)| Section::new(id, items))
                .collect(),
        )
    }

    pub fn is_sectioned(&self) -> bool {
        matches!(self, Self::Sectioned(_))
    }

    /// Total number of rows (items), excluding headers.
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::Sectioned(sections) => sections.iter().map(Section::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sections in map order. Empty for flat data.
    pub fn sections(&self) -> &[Section<T>] {
        match self {
            Self::Flat(_) => &[],
            Self::Sectioned(sections) => sections,
        }
    }

    pub fn section(&self, id: SectionId) -> Option<&Section<T>> {
        self.sections().iter().find(|s| s.id == id)
    }

    /// Section keys in map order.
    pub fn section_ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections().iter().map(|s| s.id)
    }

    /// Every key present in the mapping, including empty sections.
    pub fn keys(&self) -> SectionSet {
        self.section_ids().collect()
    }

    /// Keys whose section holds at least one item.
    pub fn occupied(&self) -> SectionSet {
        self.sections()
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.id)
            .collect()
    }

    /// Iterates rows in display order with their per-section position flags.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows {
            data: self,
            section: 0,
            index: 0,
        }
    }
}

/// A row plus the context a cell template needs.
#[derive(Debug)]
pub struct Row<'a, T> {
    pub item: &'a T,
    /// `None` for flat data.
    pub section: Option<SectionId>,
    /// Index within the section (or within the flat sequence).
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Row<'_, T> {}

/// Iterator returned by [`SectionedData::rows`].
#[derive(Debug)]
pub struct Rows<'a, T> {
    data: &'a SectionedData<T>,
    section: usize,
    index: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = Row<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.data {
            SectionedData::Flat(items) => {
                let item = items.get(self.index)?;
                let row = row_at(item, None, self.index, items.len());
                self.index += 1;
                Some(row)
            }
            SectionedData::Sectioned(sections) => loop {
                let section = sections.get(self.section)?;
                if let Some(item) = section.items.get(self.index) {
                    let row = row_at(item, Some(section.id), self.index, section.len());
                    self.index += 1;
                    return Some(row);
                }
                self.section += 1;
                self.index = 0;
            },
        }
    }
}

fn row_at<T>(item: &T, section: Option<SectionId>, index: usize, count: usize) -> Row<'_, T> {
    Row {
        item,
        section,
        index,
        is_first: index == 0,
        is_last: index + 1 == count,
    }
}
