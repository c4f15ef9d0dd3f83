//! A headless alphabetic jump index for sectioned lists.
//!
//! For host-level orchestration (templates, async layout measurement, strip wiring), see the
//! `jumplist-adapter` crate.
//!
//! This crate focuses on the navigation core of an iOS-style fast-scroll index: mapping a touch
//! on the `A`–`Z`/`#` strip to a section, suppressing repeated selections during a drag, and
//! turning "jump to section X" into one scroll offset, either from measured header positions or
//! from an analytic estimate.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the strip's on-screen metrics and touch positions
//! - section header geometry as layout resolves
//! - a [`ScrollTarget`] that applies scroll commands
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coordinator;
mod data;
mod error;
mod gesture;
mod layout;
mod options;
mod registry;
mod section;
mod state;
mod strip;
mod types;


pub use coordinator::{PendingScroll, Phase, ScrollCoordinator, ScrollOutcome, ScrollTarget};
pub use data::{Row, Rows, Section, SectionedData};
pub use error::{ConfigError, InvalidSectionId, MeasurementError, ScrollError};
pub use gesture::GestureState;
pub use layout::{EstimateMetrics, SectionLayout};
pub use options::{CoordinatorOptions, OnScrollToSection};
pub use registry::{Registration, Resolution, SectionRegistry};
pub use section::{SectionId, SectionSet};
pub use state::{MeasurementState, ScrollState};
pub use strip::{IndexStrip, StripSelection};
pub use types::{
    Generation, Geometry, LayoutRect, ScrollCommand, ScrollRequest, Strategy, StripMetrics,
};
