use alloc::string::{String, ToString};
use alloc::sync::Arc;

use jumplist::{ConfigError, CoordinatorOptions, OnScrollToSection, Section, SectionId};

use crate::{
    CellProps, CellTemplate, Chrome, OnCellSelect, SectionHeaderTemplate, StripItemTemplate,
    TitleFn,
};

/// Configuration for [`crate::SectionedListHost`].
///
/// `V` is the list engine's view type and `X` the extra props forwarded to every cell.
pub struct HostOptions<T, V, X = ()> {
    /// Suppress the jump strip even for sectioned data.
    pub hide_section_list: bool,
    /// Title of a section header. Defaults to the section symbol.
    pub get_section_title: Option<TitleFn>,
    /// Title of a strip item. Defaults to the section symbol.
    pub get_section_list_title: Option<TitleFn>,

    /// Height of the list header; required when a list header is configured.
    pub header_height: Option<f32>,
    pub section_header_height: Option<f32>,
    pub cell_height: Option<f32>,
    pub use_dynamic_heights: bool,

    pub on_cell_select: Option<OnCellSelect<T>>,
    pub on_scroll_to_section: Option<OnScrollToSection>,

    pub cell: CellTemplate<T, V, X>,
    pub section_header: Option<SectionHeaderTemplate<T, V>>,
    pub strip_item: Option<StripItemTemplate<V>>,
    pub list_header: Chrome<V>,
    pub list_footer: Chrome<V>,
    pub extra: X,
}

impl<T, V, X: Clone> Clone for HostOptions<T, V, X> {
    fn clone(&self) -> Self {
        Self {
            hide_section_list: self.hide_section_list,
            get_section_title: self.get_section_title.clone(),
            get_section_list_title: self.get_section_list_title.clone(),
            header_height: self.header_height,
            section_header_height: self.section_header_height,
            cell_height: self.cell_height,
            use_dynamic_heights: self.use_dynamic_heights,
            on_cell_select: self.on_cell_select.clone(),
            on_scroll_to_section: self.on_scroll_to_section.clone(),
            cell: Arc::clone(&self.cell),
            section_header: self.section_header.clone(),
            strip_item: self.strip_item.clone(),
            list_header: self.list_header.clone(),
            list_footer: self.list_footer.clone(),
            extra: self.extra.clone(),
        }
    }
}

impl<T, V> HostOptions<T, V, ()> {
    /// Options with measured header offsets, no list header/footer and no extra cell props.
    pub fn new(cell: impl Fn(CellProps<'_, T, ()>) -> V + Send + Sync + 'static) -> Self {
        Self::new_with_extra(cell, ())
    }
}

impl<T, V, X> HostOptions<T, V, X> {
    pub fn new_with_extra(
        cell: impl Fn(CellProps<'_, T, X>) -> V + Send + Sync + 'static,
        extra: X,
    ) -> Self {
        Self {
            hide_section_list: false,
            get_section_title: None,
            get_section_list_title: None,
            header_height: None,
            section_header_height: None,
            cell_height: None,
            use_dynamic_heights: true,
            on_cell_select: None,
            on_scroll_to_section: None,
            cell: Arc::new(cell),
            section_header: None,
            strip_item: None,
            list_header: Chrome::none(),
            list_footer: Chrome::none(),
            extra,
        }
    }

    pub fn with_hide_section_list(mut self, hide: bool) -> Self {
        self.hide_section_list = hide;
        self
    }

    pub fn with_section_title(
        mut self,
        f: impl Fn(SectionId) -> String + Send + Sync + 'static,
    ) -> Self {
        self.get_section_title = Some(Arc::new(f));
        self
    }

    pub fn with_section_list_title(
        mut self,
        f: impl Fn(SectionId) -> String + Send + Sync + 'static,
    ) -> Self {
        self.get_section_list_title = Some(Arc::new(f));
        self
    }

    pub fn with_header_height(mut self, height: Option<f32>) -> Self {
        self.header_height = height;
        self
    }

    pub fn with_section_header_height(mut self, height: Option<f32>) -> Self {
        self.section_header_height = height;
        self
    }

    pub fn with_cell_height(mut self, height: Option<f32>) -> Self {
        self.cell_height = height;
        self
    }

    pub fn with_use_dynamic_heights(mut self, use_dynamic_heights: bool) -> Self {
        self.use_dynamic_heights = use_dynamic_heights;
        self
    }

    pub fn with_on_cell_select(mut self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_cell_select = Some(Arc::new(f));
        self
    }

    pub fn with_on_scroll_to_section(
        mut self,
        f: impl Fn(SectionId) + Send + Sync + 'static,
    ) -> Self {
        self.on_scroll_to_section = Some(Arc::new(f));
        self
    }

    pub fn with_section_header(
        mut self,
        f: impl Fn(SectionId, &Section<T>, &str) -> V + Send + Sync + 'static,
    ) -> Self {
        self.section_header = Some(Arc::new(f));
        self
    }

    pub fn with_strip_item(
        mut self,
        f: impl Fn(SectionId, &str) -> V + Send + Sync + 'static,
    ) -> Self {
        self.strip_item = Some(Arc::new(f));
        self
    }

    pub fn with_list_header(mut self, header: Chrome<V>) -> Self {
        self.list_header = header;
        self
    }

    pub fn with_list_footer(mut self, footer: Chrome<V>) -> Self {
        self.list_footer = footer;
        self
    }

    /// Height of the fixed leading header that scroll offsets are corrected by.
    ///
    /// 0 when no list header is rendered.
    pub fn header_offset(&self) -> f32 {
        if self.list_header.is_present() {
            self.header_height.unwrap_or(0.0)
        } else {
            0.0
        }
    }

    /// The scroll coordinator's share of these options.
    pub fn coordinator_options(&self) -> CoordinatorOptions {
        CoordinatorOptions {
            header_offset: self.header_offset(),
            section_header_height: self.section_header_height,
            cell_height: self.cell_height,
            use_dynamic_heights: self.use_dynamic_heights,
            on_scroll_to_section: self.on_scroll_to_section.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.list_header.is_present() && self.header_height.is_none() {
            return Err(ConfigError::MissingHeaderHeight);
        }
        self.coordinator_options().validate()
    }

    pub fn section_title(&self, section: SectionId) -> String {
        match &self.get_section_title {
            Some(f) => f(section),
            None => section.as_str().to_string(),
        }
    }

    pub fn section_list_title(&self, section: SectionId) -> String {
        match &self.get_section_list_title {
            Some(f) => f(section),
            None => section.as_str().to_string(),
        }
    }
}

impl<T, V, X: core::fmt::Debug> core::fmt::Debug for HostOptions<T, V, X> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HostOptions")
            .field("hide_section_list", &self.hide_section_list)
            .field("header_height", &self.header_height)
            .field("section_header_height", &self.section_header_height)
            .field("cell_height", &self.cell_height)
            .field("use_dynamic_heights", &self.use_dynamic_heights)
            .field("list_header", &self.list_header)
            .field("list_footer", &self.list_footer)
            .field("extra", &self.extra)
            .finish_non_exhaustive()
    }
}
