use alloc::vec::Vec;

use crate::{Generation, Geometry, MeasurementError, SectionId};

/// Ticket returned by [`SectionRegistry::register`].
///
/// Carry it alongside the pending measurement and hand it back to
/// [`SectionRegistry::resolve`] once the measurement completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Registration {
    pub section: SectionId,
    pub generation: Generation,
    seq: u64,
}

/// What happened to a measurement handed back to the registry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// The geometry was recorded for the section.
    Stored(Geometry),
    /// The registration was superseded (by `clear` or by a newer registration that already
    /// resolved). Nothing changed.
    Stale,
    /// The measurement failed; the entry is left as it was.
    Failed,
}

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    issued: u64,
    applied: u64,
    in_flight: u32,
    geometry: Option<Geometry>,
}

/// Side table of measured section header positions.
///
/// Entries appear lazily as header measurements resolve; a missing entry means "not measured
/// yet", which callers must treat as a normal state. The registry holds no rendering objects.
///
/// Every registration is tagged with the registry generation plus a per-section sequence
/// number. A resolution is applied only if its generation is current and its sequence is newer
/// than the last one applied for that section, so a slow, older measurement can never overwrite
/// a newer one.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    generation: Generation,
    slots: [Slot; SectionId::COUNT],
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts a registration for `section`. Does not block and does not touch the current entry.
    pub fn register(&mut self, section: SectionId) -> Registration {
        let slot = &mut self.slots[section.index()];
        slot.issued = slot.issued.wrapping_add(1);
        slot.in_flight = slot.in_flight.saturating_add(1);
        jtrace!(
            section = section.as_str(),
            seq = slot.issued,
            generation = self.generation.0,
            "register"
        );
        Registration {
            section,
            generation: self.generation,
            seq: slot.issued,
        }
    }

    /// Completes a registration.
    pub fn resolve(
        &mut self,
        registration: Registration,
        result: Result<Geometry, MeasurementError>,
    ) -> Resolution {
        if registration.generation != self.generation {
            jtrace!(
                section = registration.section.as_str(),
                stale_generation = registration.generation.0,
                generation = self.generation.0,
                "discarding measurement from a previous generation"
            );
            return Resolution::Stale;
        }

        let slot = &mut self.slots[registration.section.index()];
        slot.in_flight = slot.in_flight.saturating_sub(1);

        if registration.seq <= slot.applied {
            jtrace!(
                section = registration.section.as_str(),
                seq = registration.seq,
                applied = slot.applied,
                "discarding superseded measurement"
            );
            return Resolution::Stale;
        }

        match result {
            Ok(geometry) => {
                slot.applied = registration.seq;
                slot.geometry = Some(geometry);
                jtrace!(
                    section = registration.section.as_str(),
                    y = geometry.y,
                    height = geometry.height,
                    "stored section geometry"
                );
                Resolution::Stored(geometry)
            }
            Err(_err) => {
                jwarn!(
                    section = registration.section.as_str(),
                    error = %_err,
                    "section header measurement failed"
                );
                Resolution::Failed
            }
        }
    }

    /// Whether resolving `registration` could no longer change anything: it belongs to a
    /// previous generation, or a newer registration for its section already stored geometry.
    pub fn is_superseded(&self, registration: Registration) -> bool {
        registration.generation != self.generation
            || registration.seq <= self.slots[registration.section.index()].applied
    }

    /// Gives up on a registration that will never be resolved.
    ///
    /// The section stops counting it as in flight. Registrations from a previous generation are
    /// ignored.
    pub fn abandon(&mut self, registration: Registration) {
        if registration.generation != self.generation {
            return;
        }
        let slot = &mut self.slots[registration.section.index()];
        slot.in_flight = slot.in_flight.saturating_sub(1);
        jtrace!(
            section = registration.section.as_str(),
            seq = registration.seq,
            in_flight = slot.in_flight,
            "abandoned registration"
        );
    }

    pub fn lookup(&self, section: SectionId) -> Option<Geometry> {
        self.slots[section.index()].geometry
    }

    pub fn contains(&self, section: SectionId) -> bool {
        self.lookup(section).is_some()
    }

    /// Whether a registration for `section` in the current generation has not resolved yet.
    pub fn is_pending(&self, section: SectionId) -> bool {
        self.slots[section.index()].in_flight > 0
    }

    /// Drops every entry and supersedes every outstanding registration.
    pub fn clear(&mut self) {
        self.generation.bump();
        self.slots = [Slot::default(); SectionId::COUNT];
        jdebug!(generation = self.generation.0, "registry cleared");
    }

    /// Number of measured sections.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.geometry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates measured sections in strip order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, Geometry)> + '_ {
        SectionId::iter().filter_map(move |id| self.lookup(id).map(|g| (id, g)))
    }

    /// Exports the measured geometry (useful for persistence).
    pub fn export(&self) -> Vec<(SectionId, Geometry)> {
        self.iter().collect()
    }

    /// Seeds entries from a previous export.
    ///
    /// Imported entries behave like resolved measurements of the current generation: any
    /// registration that resolves afterwards replaces them.
    pub fn import(&mut self, entries: impl IntoIterator<Item = (SectionId, Geometry)>) {
        for (id, geometry) in entries {
            jtrace!(section = id.as_str(), y = geometry.y, "imported section geometry");
            self.slots[id.index()].geometry = Some(geometry);
        }
    }
}
