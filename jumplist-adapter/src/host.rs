use alloc::vec::Vec;
use core::task::{Context, Poll};

use jumplist::{
    ConfigError, Geometry, IndexStrip, MeasurementState, Registration, Resolution, ScrollCommand,
    ScrollCoordinator, ScrollError, ScrollOutcome, ScrollState, SectionId, SectionLayout,
    SectionRegistry, SectionedData, StripMetrics, StripSelection,
};

use crate::{CellProps, HostOptions, LayoutMeasure, ListEntry, ListView, MeasureFuture, RenderMode};

enum MeasureTarget {
    Header(Registration),
    Strip(u64),
}

struct PendingMeasure {
    target: MeasureTarget,
    future: MeasureFuture,
}

/// A sectioned list with an alphabetic jump strip.
///
/// Owns the section registry, the strip and the scroll coordinator for one mounted list, plus
/// every layout measurement still in flight for it. It does not render on its own: the list
/// engine (`L`) asks for views through [`Self::render_entry`] and friends, and the host reports
/// layout back through [`Self::on_section_header_layout`] and [`Self::on_strip_layout`].
///
/// Measurements are futures. Drive them with [`Self::tick`] once per frame (or with
/// [`Self::poll_pending`] from an executor); nothing here blocks.
///
/// Dropping the host, or calling [`Self::unmount`], drops every pending measurement.
pub struct SectionedListHost<T, L: ListView, M: LayoutMeasure, X = ()> {
    options: HostOptions<T, L::View, X>,
    data: SectionedData<T>,
    entries: Vec<ListEntry>,
    list: L,
    measure: M,
    registry: SectionRegistry,
    strip: IndexStrip,
    strip_seq: u64,
    coordinator: ScrollCoordinator,
    pending: Vec<PendingMeasure>,
    scroll: ScrollState,
}

impl<T, L: ListView, M: LayoutMeasure, X> SectionedListHost<T, L, M, X> {
    pub fn new(
        options: HostOptions<T, L::View, X>,
        data: SectionedData<T>,
        list: L,
        measure: M,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let coordinator = ScrollCoordinator::new(options.coordinator_options())?;
        let mut host = Self {
            options,
            data: SectionedData::default(),
            entries: Vec::new(),
            list,
            measure,
            registry: SectionRegistry::new(),
            strip: IndexStrip::default(),
            strip_seq: 0,
            coordinator,
            pending: Vec::new(),
            scroll: ScrollState::default(),
        };
        host.set_data(data);
        Ok(host)
    }

    pub fn options(&self) -> &HostOptions<T, L::View, X> {
        &self.options
    }

    /// Replaces the options. On error the previous options stay in place.
    pub fn set_options(&mut self, options: HostOptions<T, L::View, X>) -> Result<(), ConfigError> {
        options.validate()?;
        self.coordinator.set_options(options.coordinator_options())?;
        self.options = options;
        Ok(())
    }

    pub fn data(&self) -> &SectionedData<T> {
        &self.data
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn strip(&self) -> &IndexStrip {
        &self.strip
    }

    pub fn coordinator(&self) -> &ScrollCoordinator {
        &self.coordinator
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn mode(&self) -> RenderMode {
        if self.data.is_sectioned() {
            RenderMode::Sectioned
        } else {
            RenderMode::Flat
        }
    }

    /// Whether the jump strip is rendered (sectioned data and not hidden).
    pub fn shows_strip(&self) -> bool {
        self.data.is_sectioned() && !self.options.hide_section_list
    }

    /// The render sequence handed to the list engine.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Number of layout measurements still in flight.
    pub fn pending_measurements(&self) -> usize {
        self.pending.len()
    }

    /// Replaces the data set and asks the list engine to reload.
    ///
    /// If the section keys or any section's item count changed, measured header offsets no
    /// longer describe the new layout: the registry is cleared and in-flight header measurements
    /// are dropped.
    pub fn set_data(&mut self, data: SectionedData<T>) {
        let layout = SectionLayout::from_data(&data);
        let layout_changed = *self.coordinator.layout() != layout;
        if layout_changed {
            self.registry.clear();
            self.pending
                .retain(|p| matches!(p.target, MeasureTarget::Strip(_)));
        }

        self.strip.set_occupied(data.occupied());
        self.coordinator.set_layout(layout);
        self.data = data;
        self.entries = build_entries(&self.data);

        adebug!(
            sectioned = self.data.is_sectioned(),
            sections = self.data.sections().len(),
            rows = self.data.len(),
            layout_changed,
            "data set replaced"
        );
        let mode = self.mode();
        self.list.reload(mode, self.entries.len());
    }

    /// Renders the entry at `index` of [`Self::entries`].
    pub fn render_entry(&self, index: usize) -> Option<L::View> {
        match *self.entries.get(index)? {
            ListEntry::Header(section) => self.render_section_header(section),
            ListEntry::Row { section, index } => self.render_row(section, index),
        }
    }

    pub fn render_section_header(&self, section: SectionId) -> Option<L::View> {
        let data = self.data.section(section)?;
        let title = self.options.section_title(section);
        Some(match &self.options.section_header {
            Some(template) => template(section, data, &title),
            None => self.list.default_section_header(&title),
        })
    }

    /// Renders row `index` of `section` (or of the flat sequence when `section` is `None`).
    pub fn render_row(&self, section: Option<SectionId>, index: usize) -> Option<L::View> {
        let items: &[T] = match (section, &self.data) {
            (None, SectionedData::Flat(items)) => items,
            (Some(id), SectionedData::Sectioned(_)) => &self.data.section(id)?.items,
            _ => return None,
        };
        let item = items.get(index)?;
        let props = CellProps {
            item,
            section,
            index,
            is_first: index == 0,
            is_last: index + 1 == items.len(),
            extra: &self.options.extra,
            on_select: self.options.on_cell_select.as_ref(),
        };
        Some((self.options.cell)(props))
    }

    /// Strip items in order, or `None` when the strip is not shown.
    pub fn render_strip(&self) -> Option<Vec<L::View>> {
        if !self.shows_strip() {
            return None;
        }
        let views = self
            .strip
            .items()
            .into_iter()
            .map(|section| {
                let title = self.options.section_list_title(section);
                match &self.options.strip_item {
                    Some(template) => template(section, &title),
                    None => self.list.default_strip_item(&title),
                }
            })
            .collect();
        Some(views)
    }

    pub fn render_list_header(&self) -> Option<L::View> {
        self.options.list_header.resolve()
    }

    pub fn render_list_footer(&self) -> Option<L::View> {
        self.options.list_footer.resolve()
    }

    /// A section header was laid out: measure it.
    pub fn on_section_header_layout(&mut self, section: SectionId, handle: &M::Handle) {
        if !self.data.keys().contains(section) {
            atrace!(section = section.as_str(), "ignoring layout of unknown header");
            return;
        }
        let registration = self.registry.register(section);
        let future = self.measure.measure(handle);
        self.pending.push(PendingMeasure {
            target: MeasureTarget::Header(registration),
            future,
        });
    }

    /// The strip's first item was laid out: measure it to learn the strip geometry.
    pub fn on_strip_layout(&mut self, handle: &M::Handle) {
        self.strip_seq = self.strip_seq.wrapping_add(1);
        let future = self.measure.measure(handle);
        self.pending.push(PendingMeasure {
            target: MeasureTarget::Strip(self.strip_seq),
            future,
        });
    }

    /// Polls pending measurements with a no-op waker.
    ///
    /// Returns the last scroll command issued by a deferred scroll that completed.
    pub fn tick(&mut self) -> Option<ScrollCommand> {
        let mut cx = Context::from_waker(futures_task::noop_waker_ref());
        self.poll_pending(&mut cx)
    }

    /// Polls pending measurements, applying every one that is ready.
    ///
    /// Returns the last scroll command issued by a deferred scroll that completed.
    pub fn poll_pending(&mut self, cx: &mut Context<'_>) -> Option<ScrollCommand> {
        let mut committed = None;
        let mut i = 0;
        while i < self.pending.len() {
            let Poll::Ready(result) = self.pending[i].future.as_mut().poll(cx) else {
                i += 1;
                continue;
            };
            let done = self.pending.remove(i);
            match done.target {
                MeasureTarget::Header(registration) => {
                    let result = result.map(Geometry::from);
                    if let Some(command) = self.apply_header(registration, result) {
                        committed = Some(command);
                    }
                }
                MeasureTarget::Strip(seq) => match result {
                    Ok(rect) if seq == self.strip_seq => {
                        self.strip.set_metrics(StripMetrics::from(rect));
                    }
                    Ok(_) => {
                        atrace!(seq, "discarding superseded strip measurement");
                    }
                    Err(_err) => {
                        awarn!(error = %_err, "strip measurement failed");
                    }
                },
            }
        }
        self.drop_superseded_headers();
        committed
    }

    pub fn on_strip_touch_start(&mut self, y: f32) -> Option<Result<ScrollOutcome, ScrollError>> {
        if !self.shows_strip() {
            return None;
        }
        let selection = self.strip.on_touch_start(y)?;
        Some(self.scroll_to_selection(selection))
    }

    pub fn on_strip_touch_move(&mut self, y: f32) -> Option<Result<ScrollOutcome, ScrollError>> {
        if !self.shows_strip() {
            return None;
        }
        let selection = self.strip.on_touch_move(y)?;
        Some(self.scroll_to_selection(selection))
    }

    pub fn on_strip_touch_end(&mut self) {
        self.strip.on_touch_end();
    }

    /// Jumps to `section` programmatically.
    ///
    /// Flat data never scrolls ([`ScrollError::NotSectioned`]).
    pub fn scroll_to_section(&mut self, section: SectionId) -> Result<ScrollOutcome, ScrollError> {
        if !self.data.is_sectioned() {
            return Err(ScrollError::NotSectioned);
        }
        let selection = self.strip.select(section);
        self.scroll_to_selection(selection)
    }

    /// The list engine scrolled to `offset`. Returns the section now at the top of the viewport.
    pub fn on_scroll(&mut self, offset: f32) -> Option<SectionId> {
        let current = if self.data.is_sectioned() {
            self.coordinator.section_at_offset(offset, &self.registry)
        } else {
            None
        };
        if current != self.scroll.current_section {
            atrace!(
                offset,
                section = ?current,
                "current section changed"
            );
        }
        self.scroll = ScrollState {
            offset,
            current_section: current,
        };
        current
    }

    /// Everything measured so far.
    pub fn snapshot(&self) -> MeasurementState {
        MeasurementState {
            sections: self.registry.export(),
            strip: self.strip.metrics(),
        }
    }

    /// Seeds measurements from a snapshot taken for the same data set.
    pub fn restore(&mut self, state: MeasurementState) {
        self.registry.import(state.sections);
        if let Some(metrics) = state.strip {
            self.strip.set_metrics(metrics);
        }
    }

    /// Tears down everything tied to the mounted views.
    ///
    /// Pending measurements are dropped, a waiting scroll is cancelled and all measured geometry
    /// is forgotten. Data and options are kept, so the host can be laid out again.
    pub fn unmount(&mut self) {
        adebug!(pending = self.pending.len(), "unmount");
        self.pending.clear();
        self.registry.clear();
        self.coordinator.cancel();
        self.strip.on_touch_end();
        self.strip.clear_metrics();
        self.strip_seq = self.strip_seq.wrapping_add(1);
    }

    fn scroll_to_selection(
        &mut self,
        selection: StripSelection,
    ) -> Result<ScrollOutcome, ScrollError> {
        atrace!(
            section = selection.section.as_str(),
            from_touch = selection.from_touch,
            "scroll to section"
        );
        self.coordinator
            .scroll_to_section(selection.section, &self.registry, &mut self.list)
    }

    /// Drops header measurements whose result the registry would discard anyway.
    fn drop_superseded_headers(&mut self) {
        let registry = &mut self.registry;
        self.pending.retain(|p| match p.target {
            MeasureTarget::Header(registration) if registry.is_superseded(registration) => {
                registry.abandon(registration);
                false
            }
            _ => true,
        });
    }

    fn apply_header(
        &mut self,
        registration: Registration,
        result: Result<Geometry, jumplist::MeasurementError>,
    ) -> Option<ScrollCommand> {
        let section = registration.section;
        let outcome = match self.registry.resolve(registration, result.clone()) {
            Resolution::Stored(geometry) => {
                self.coordinator
                    .on_section_resolved(section, Ok(geometry), &mut self.list)
            }
            // Another measurement of the same header may still succeed.
            Resolution::Failed if !self.registry.is_pending(section) => {
                self.coordinator
                    .on_section_resolved(section, result, &mut self.list)
            }
            Resolution::Failed | Resolution::Stale => None,
        };
        match outcome? {
            Ok(command) => Some(command),
            Err(_err) => {
                awarn!(section = section.as_str(), error = %_err, "deferred scroll dropped");
                None
            }
        }
    }
}

impl<T, L: ListView, M: LayoutMeasure, X: core::fmt::Debug> core::fmt::Debug
    for SectionedListHost<T, L, M, X>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionedListHost")
            .field("options", &self.options)
            .field("mode", &self.mode())
            .field("entries", &self.entries.len())
            .field("registry", &self.registry)
            .field("strip", &self.strip)
            .field("coordinator", &self.coordinator)
            .field("pending", &self.pending.len())
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}

fn build_entries<T>(data: &SectionedData<T>) -> Vec<ListEntry> {
    match data {
        SectionedData::Flat(items) => (0..items.len())
            .map(|index| ListEntry::Row {
                section: None,
                index,
            })
            .collect(),
        SectionedData::Sectioned(sections) => {
            let mut entries = Vec::with_capacity(sections.len() + data.len());
            for section in sections {
                entries.push(ListEntry::Header(section.id));
                entries.extend((0..section.len()).map(|index| ListEntry::Row {
                    section: Some(section.id),
                    index,
                }));
            }
            entries
        }
    }
}
