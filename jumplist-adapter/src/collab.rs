use alloc::boxed::Box;
use core::future::Future;
use core::pin::Pin;

use jumplist::{LayoutRect, MeasurementError, ScrollTarget};

/// A pending layout measurement.
///
/// May never resolve (the element can unmount first); the host drops it in that case.
pub type MeasureFuture = Pin<Box<dyn Future<Output = Result<LayoutRect, MeasurementError>>>>;

/// The platform's asynchronous layout primitive.
pub trait LayoutMeasure {
    /// A stable reference to a rendered element.
    type Handle;

    /// Starts measuring `handle`. Must not block.
    fn measure(&self, handle: &Self::Handle) -> MeasureFuture;
}

/// The external list-rendering engine.
///
/// The host never renders rows on its own: it tells the list which mode to use and how many
/// entries there are, and the list asks back for views through
/// [`crate::SectionedListHost::render_entry`].
pub trait ListView: ScrollTarget {
    type View;

    /// The data set changed: re-query `len` entries in `mode`.
    fn reload(&mut self, mode: RenderMode, len: usize);

    /// Fallback view for a section header when no template is configured.
    fn default_section_header(&self, title: &str) -> Self::View;

    /// Fallback view for a strip item when no template is configured.
    fn default_strip_item(&self, title: &str) -> Self::View;
}

/// How the list engine should render the current data set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// Rows only. No section headers, no strip.
    Flat,
    /// Section headers interleaved with their rows.
    Sectioned,
}

/// One position in the list engine's render sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListEntry {
    Header(jumplist::SectionId),
    Row {
        section: Option<jumplist::SectionId>,
        index: usize,
    },
}
