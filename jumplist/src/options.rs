use alloc::sync::Arc;

use crate::{ConfigError, EstimateMetrics, SectionId};

/// Fired once per issued scroll command, right after the command is handed to the list view.
pub type OnScrollToSection = Arc<dyn Fn(SectionId) + Send + Sync>;

/// Configuration for [`crate::ScrollCoordinator`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
pub struct CoordinatorOptions {
    /// Height of a fixed leading header element (0 if none).
    pub header_offset: f32,
    /// Height of a section header.
    ///
    /// Subtracted from measured offsets so the target header lands below any pinned header, and
    /// used for estimated offsets.
    pub section_header_height: Option<f32>,
    /// Height of a row. Only used for estimated offsets.
    pub cell_height: Option<f32>,
    /// Prefer measured header offsets over the analytic estimate when both are available.
    ///
    /// When `false`, the estimate is the primary strategy and both `cell_height` and
    /// `section_header_height` are required.
    pub use_dynamic_heights: bool,
    pub on_scroll_to_section: Option<OnScrollToSection>,
}

impl Clone for CoordinatorOptions {
    fn clone(&self) -> Self {
        Self {
            header_offset: self.header_offset,
            section_header_height: self.section_header_height,
            cell_height: self.cell_height,
            use_dynamic_heights: self.use_dynamic_heights,
            on_scroll_to_section: self.on_scroll_to_section.clone(),
        }
    }
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinatorOptions {
    /// Options that rely on measured header offsets only.
    pub fn new() -> Self {
        Self {
            header_offset: 0.0,
            section_header_height: None,
            cell_height: None,
            use_dynamic_heights: true,
            on_scroll_to_section: None,
        }
    }

    /// Options that estimate offsets from fixed heights.
    pub fn estimated(section_header_height: f32, cell_height: f32) -> Self {
        Self {
            section_header_height: Some(section_header_height),
            cell_height: Some(cell_height),
            use_dynamic_heights: false,
            ..Self::new()
        }
    }

    pub fn with_header_offset(mut self, header_offset: f32) -> Self {
        self.header_offset = header_offset;
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

    pub fn with_on_scroll_to_section(
        mut self,
        f: Option<impl Fn(SectionId) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_to_section = f.map(|f| Arc::new(f) as _);
        self
    }

    /// Fixed heights for the estimate strategy, if both are configured.
    pub fn estimate_metrics(&self) -> Option<EstimateMetrics> {
        Some(EstimateMetrics {
            header_offset: self.header_offset,
            section_header_height: self.section_header_height?,
            cell_height: self.cell_height?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_height("header_offset", self.header_offset)?;
        if let Some(h) = self.section_header_height {
            check_height("section_header_height", h)?;
        }
        if let Some(h) = self.cell_height {
            check_height("cell_height", h)?;
        }
        if !self.use_dynamic_heights {
            if self.cell_height.is_none() {
                return Err(ConfigError::MissingCellHeight);
            }
            if self.section_header_height.is_none() {
                return Err(ConfigError::MissingSectionHeaderHeight);
            }
        }
        Ok(())
    }
}

fn check_height(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidHeight { field, value })
    }
}

impl core::fmt::Debug for CoordinatorOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoordinatorOptions")
            .field("header_offset", &self.header_offset)
            .field("section_header_height", &self.section_header_height)
            .field("cell_height", &self.cell_height)
            .field("use_dynamic_heights", &self.use_dynamic_heights)
            .finish_non_exhaustive()
    }
}
