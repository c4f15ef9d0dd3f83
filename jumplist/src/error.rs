use alloc::string::String;

use crate::SectionId;

/// A character outside the section universe (`A`–`Z`, `a`–`z`, `#`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a section symbol")]
pub struct InvalidSectionId(pub char);

/// Setup-time configuration errors.
///
/// These are reported when options are validated (typically when a host is constructed), never
/// silently defaulted.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cell_height is required when offsets are estimated (use_dynamic_heights = false)")]
    MissingCellHeight,
    #[error(
        "section_header_height is required when offsets are estimated (use_dynamic_heights = false)"
    )]
    MissingSectionHeaderHeight,
    #[error("header_height is required when a list header is rendered")]
    MissingHeaderHeight,
    #[error("{field} must be a finite, non-negative height (got {value})")]
    InvalidHeight { field: &'static str, value: f32 },
}

/// Why a `scroll_to_section` request did not issue a scroll command.
///
/// All variants are recoverable: the list stays where it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    #[error("section {0} is not part of the current data set")]
    UnknownSection(SectionId),
    #[error("the list is not sectioned")]
    NotSectioned,
    #[error("section {0} has not been measured and no estimate is configured")]
    Unmeasured(SectionId),
}

/// Failure reported by the layout measurement collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MeasurementError {
    #[error("element was unmounted before layout resolved")]
    Unmounted,
    #[error("element is not attached to a window")]
    Detached,
    #[error("measurement failed: {0}")]
    Failed(String),
}
