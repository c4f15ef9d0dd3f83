use alloc::string::String;
use alloc::sync::Arc;

use jumplist::{Section, SectionId};

pub type OnCellSelect<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Maps a section to the title shown in its header (or on the strip).
pub type TitleFn = Arc<dyn Fn(SectionId) -> String + Send + Sync>;

pub type CellTemplate<T, V, X> = Arc<dyn Fn(CellProps<'_, T, X>) -> V + Send + Sync>;

/// `(section, section data, title) -> view`.
pub type SectionHeaderTemplate<T, V> = Arc<dyn Fn(SectionId, &Section<T>, &str) -> V + Send + Sync>;

/// `(section, title) -> view`.
pub type StripItemTemplate<V> = Arc<dyn Fn(SectionId, &str) -> V + Send + Sync>;

pub type ViewFn<V> = Arc<dyn Fn() -> V + Send + Sync>;

/// Everything a cell template gets to render one row.
pub struct CellProps<'a, T, X> {
    pub item: &'a T,
    /// `None` for flat data.
    pub section: Option<SectionId>,
    /// Index within the section (or within the whole sequence for flat data).
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
    /// Host-provided props forwarded untouched to every cell.
    pub extra: &'a X,
    pub on_select: Option<&'a OnCellSelect<T>>,
}

impl<T, X> CellProps<'_, T, X> {
    /// Reports this cell's item through the host's `on_cell_select` callback, if any.
    pub fn select(&self) {
        if let Some(on_select) = self.on_select {
            on_select(self.item);
        }
    }
}

impl<T, X> Clone for CellProps<'_, T, X> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, X> Copy for CellProps<'_, T, X> {}

impl<T: core::fmt::Debug, X: core::fmt::Debug> core::fmt::Debug for CellProps<'_, T, X> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellProps")
            .field("item", self.item)
            .field("section", &self.section)
            .field("index", &self.index)
            .field("is_first", &self.is_first)
            .field("is_last", &self.is_last)
            .field("extra", self.extra)
            .finish_non_exhaustive()
    }
}

/// A list header or footer.
///
/// A host may hand over a component template, a render function, or both; the component wins.
pub struct Chrome<V> {
    pub component: Option<ViewFn<V>>,
    pub render: Option<ViewFn<V>>,
}

impl<V> Chrome<V> {
    pub const fn none() -> Self {
        Self {
            component: None,
            render: None,
        }
    }

    pub fn from_component(f: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Self {
            component: Some(Arc::new(f)),
            render: None,
        }
    }

    pub fn from_render(f: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Self {
            component: None,
            render: Some(Arc::new(f)),
        }
    }

    pub fn is_present(&self) -> bool {
        self.component.is_some() || self.render.is_some()
    }

    pub fn resolve(&self) -> Option<V> {
        self.component
            .as_ref()
            .or(self.render.as_ref())
            .map(|f| f())
    }
}

impl<V> Default for Chrome<V> {
    fn default() -> Self {
        Self::none()
    }
}

impl<V> Clone for Chrome<V> {
    fn clone(&self) -> Self {
        Self {
            component: self.component.clone(),
            render: self.render.clone(),
        }
    }
}

impl<V> core::fmt::Debug for Chrome<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Chrome")
            .field("component", &self.component.is_some())
            .field("render", &self.render.is_some())
            .finish()
    }
}
