use crate::SectionId;

/// Raw output of the layout measurement collaborator: `{x, y, width, height}` in page
/// coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The measured position of a section header (`y` along the scroll axis, plus its height).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub y: f32,
    pub height: f32,
}

impl Geometry {
    pub fn new(y: f32, height: f32) -> Self {
        Self { y, height }
    }

    pub fn end(&self) -> f32 {
        self.y + self.height
    }
}

impl From<LayoutRect> for Geometry {
    fn from(rect: LayoutRect) -> Self {
        Self {
            y: rect.y,
            height: rect.height,
        }
    }
}

/// Where the strip's first item sits on screen, and how tall each item is.
///
/// All 27 strip items are equally sized, so this is enough to map a touch position to an index.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripMetrics {
    pub origin_y: f32,
    pub item_height: f32,
}

impl StripMetrics {
    pub fn new(origin_y: f32, item_height: f32) -> Self {
        Self {
            origin_y,
            item_height,
        }
    }

    /// Whether touches can be mapped with these metrics at all.
    pub fn is_usable(&self) -> bool {
        self.origin_y.is_finite() && self.item_height.is_finite() && self.item_height > 0.0
    }
}

impl From<LayoutRect> for StripMetrics {
    fn from(rect: LayoutRect) -> Self {
        Self {
            origin_y: rect.y,
            item_height: rect.height,
        }
    }
}

/// How a scroll target offset was (or will be) computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// From the header geometry recorded in the section registry.
    Measured,
    /// Analytically, from fixed cell/section-header heights and item counts.
    Estimated,
}

/// A single "jump to section" intent.
///
/// Produced by a strip selection or a programmatic call, consumed once by the coordinator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub section: SectionId,
    /// Height of any fixed leading header above the first section.
    pub origin_height: f32,
    pub strategy: Strategy,
}

/// The imperative command handed to the list view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub section: SectionId,
    pub offset: f32,
    pub animated: bool,
    pub strategy: Strategy,
}

/// Monotonic tag used to discard asynchronous results that were superseded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

impl Generation {
    pub(crate) fn bump(&mut self) -> Generation {
        self.0 = self.0.wrapping_add(1);
        *self
    }
}
