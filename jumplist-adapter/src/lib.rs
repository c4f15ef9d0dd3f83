//! Host orchestration for the `jumplist` crate.
//!
//! `jumplist` owns the navigation math and state. This crate wires it to the outside world:
//!
//! - the list engine and the platform's async layout primitive, as two small traits
//!   ([`ListView`], [`LayoutMeasure`])
//! - host-supplied cell, header and strip templates
//! - [`SectionedListHost`], which drives header registration, strip touches and scroll commands
//!
//! It stays framework-agnostic: no bindings to a particular UI toolkit.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod collab;
mod host;
mod options;
mod template;

#[cfg(test)]
mod tests;

pub use collab::{LayoutMeasure, ListEntry, ListView, MeasureFuture, RenderMode};
pub use host::SectionedListHost;
pub use options::HostOptions;
pub use template::{
    CellProps, CellTemplate, Chrome, OnCellSelect, SectionHeaderTemplate, StripItemTemplate,
    TitleFn, ViewFn,
};
