use alloc::vec::Vec;

use crate::{Geometry, SectionId, StripMetrics};

/// A serializable snapshot of everything that was measured for a list.
///
/// Restoring it lets a list jump to measured offsets right away instead of waiting for headers
/// to be laid out again. Only restore it for the same data set it was captured from.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementState {
    pub sections: Vec<(SectionId, Geometry)>,
    pub strip: Option<StripMetrics>,
}

/// A serializable snapshot of the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f32,
    pub current_section: Option<SectionId>,
}
