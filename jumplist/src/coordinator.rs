use crate::{
    ConfigError, CoordinatorOptions, Generation, Geometry, MeasurementError, ScrollCommand,
    ScrollError, ScrollRequest, SectionId, SectionLayout, SectionRegistry, Strategy,
};

/// The imperative side of the list view: "scroll to this offset".
///
/// The coordinator issues exactly one call per committed request and never waits for the
/// scroll to finish.
pub trait ScrollTarget {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool);
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for &mut T {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        (**self).scroll_to_offset(offset, animated);
    }
}

/// A request waiting for its section header to be measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingScroll {
    pub request: ScrollRequest,
    pub generation: Generation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Resolving(PendingScroll),
}

/// Result of a successful `scroll_to_section` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollOutcome {
    /// The scroll command was issued.
    Committed(ScrollCommand),
    /// The header measurement is still in flight; the command is issued when it resolves,
    /// unless a newer request supersedes this one first.
    Deferred(PendingScroll),
}

impl ScrollOutcome {
    pub fn command(&self) -> Option<ScrollCommand> {
        match self {
            Self::Committed(command) => Some(*command),
            Self::Deferred(_) => None,
        }
    }
}

enum Plan {
    Ready(ScrollRequest, f32),
    Await(ScrollRequest),
    Unresolved,
}

/// Turns "jump to section X" into a single scroll command.
///
/// Offsets come from one of two strategies:
/// - measured: `geometry.y - section_header_height - header_offset`, from the registry;
/// - estimated: `header_offset + Σ(section_header_height + count_i * cell_height)` over the
///   preceding sections.
///
/// With `use_dynamic_heights` the measured offset wins when both exist; otherwise the estimate
/// does. If neither exists but the header's measurement is in flight, the request waits for it
/// (`Resolving`). Every new request supersedes a waiting one.
#[derive(Clone, Debug)]
pub struct ScrollCoordinator {
    options: CoordinatorOptions,
    layout: SectionLayout,
    generation: Generation,
    pending: Option<PendingScroll>,
    last_command: Option<ScrollCommand>,
}

impl ScrollCoordinator {
    pub fn new(options: CoordinatorOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        jdebug!(
            use_dynamic_heights = options.use_dynamic_heights,
            header_offset = options.header_offset,
            "ScrollCoordinator::new"
        );
        Ok(Self {
            options,
            layout: SectionLayout::default(),
            generation: Generation::default(),
            pending: None,
            last_command: None,
        })
    }

    pub fn options(&self) -> &CoordinatorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CoordinatorOptions) -> Result<(), ConfigError> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// Replaces the section order/counts. Cancels a waiting request.
    pub fn set_layout(&mut self, layout: SectionLayout) {
        self.layout = layout;
        self.cancel();
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        match self.pending {
            Some(pending) => Phase::Resolving(pending),
            None => Phase::Idle,
        }
    }

    pub fn pending(&self) -> Option<PendingScroll> {
        self.pending
    }

    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.last_command
    }

    /// Drops a waiting request; its eventual resolution is ignored.
    pub fn cancel(&mut self) {
        self.generation.bump();
        if let Some(_pending) = self.pending.take() {
            jtrace!(
                section = _pending.request.section.as_str(),
                "cancelled pending scroll"
            );
        }
    }

    /// Offset for a header measured at `geometry`.
    ///
    /// Not clamped: a header laid out above the content start yields a negative offset, and the
    /// list engine decides how to clamp it.
    pub fn measured_offset(&self, geometry: Geometry) -> f32 {
        let section_header = self.options.section_header_height.unwrap_or(0.0);
        geometry.y - section_header - self.options.header_offset
    }

    /// Analytic offset of `section`, if fixed heights are configured and the section exists.
    pub fn estimated_offset(&self, section: SectionId) -> Option<f32> {
        let metrics = self.options.estimate_metrics()?;
        self.layout.estimated_offset(section, metrics)
    }

    pub fn scroll_to_section(
        &mut self,
        section: SectionId,
        registry: &SectionRegistry,
        target: &mut dyn ScrollTarget,
    ) -> Result<ScrollOutcome, ScrollError> {
        let generation = self.generation.bump();
        if let Some(_prev) = self.pending.take() {
            jtrace!(
                superseded = _prev.request.section.as_str(),
                section = section.as_str(),
                "superseding pending scroll"
            );
        }

        if !self.layout.contains(section) {
            jwarn!(section = section.as_str(), "scroll target not in data set");
            return Err(ScrollError::UnknownSection(section));
        }

        match self.plan(section, registry) {
            Plan::Ready(request, offset) => {
                Ok(ScrollOutcome::Committed(self.commit(request, offset, target)))
            }
            Plan::Await(request) => {
                let pending = PendingScroll {
                    request,
                    generation,
                };
                jdebug!(section = section.as_str(), "waiting for header measurement");
                self.pending = Some(pending);
                Ok(ScrollOutcome::Deferred(pending))
            }
            Plan::Unresolved => {
                jwarn!(
                    section = section.as_str(),
                    "scroll target neither measured nor estimable"
                );
                Err(ScrollError::Unmeasured(section))
            }
        }
    }

    /// Completes a deferred request.
    ///
    /// Returns `None` when `pending` was superseded or cancelled. On measurement failure the
    /// request falls back to the estimate (if one has become available), otherwise it is dropped
    /// with [`ScrollError::Unmeasured`].
    pub fn resolve_pending(
        &mut self,
        pending: PendingScroll,
        result: Result<Geometry, MeasurementError>,
        target: &mut dyn ScrollTarget,
    ) -> Option<Result<ScrollCommand, ScrollError>> {
        if pending.generation != self.generation || self.pending != Some(pending) {
            jtrace!(
                section = pending.request.section.as_str(),
                "discarding stale scroll resolution"
            );
            return None;
        }
        self.pending = None;

        let section = pending.request.section;
        match result {
            Ok(geometry) => {
                let offset = self.measured_offset(geometry);
                Some(Ok(self.commit(pending.request, offset, target)))
            }
            Err(_err) => {
                jwarn!(
                    section = section.as_str(),
                    error = %_err,
                    "pending scroll lost its measurement"
                );
                match self.estimated_offset(section) {
                    Some(offset) => {
                        let request = ScrollRequest {
                            strategy: Strategy::Estimated,
                            ..pending.request
                        };
                        Some(Ok(self.commit(request, offset, target)))
                    }
                    None => Some(Err(ScrollError::Unmeasured(section))),
                }
            }
        }
    }

    /// Feeds a header measurement result to a request waiting on `section`, if any.
    pub fn on_section_resolved(
        &mut self,
        section: SectionId,
        result: Result<Geometry, MeasurementError>,
        target: &mut dyn ScrollTarget,
    ) -> Option<Result<ScrollCommand, ScrollError>> {
        let pending = self.pending.filter(|p| p.request.section == section)?;
        self.resolve_pending(pending, result, target)
    }

    /// The section shown at the top of the viewport when scrolled to `offset`.
    ///
    /// Each section starts at its measured header offset, or at its estimate while unmeasured.
    /// Sections with neither are skipped. `None` when no section has a known start.
    pub fn section_at_offset(&self, offset: f32, registry: &SectionRegistry) -> Option<SectionId> {
        let metrics = self.options.estimate_metrics();
        if !self.layout.sections().any(|s| registry.contains(s)) {
            return self.layout.section_at_offset(offset, metrics?);
        }
        let mut known_any = false;
        let mut current = None;
        for section in self.layout.sections() {
            let start = match registry.lookup(section) {
                Some(geometry) => Some(self.measured_offset(geometry)),
                None => metrics.and_then(|m| self.layout.estimated_offset(section, m)),
            };
            let Some(start) = start else {
                continue;
            };
            known_any = true;
            if start <= offset {
                current = Some(section);
            }
        }
        if !known_any {
            return None;
        }
        current.or_else(|| self.layout.sections().next())
    }

    fn plan(&self, section: SectionId, registry: &SectionRegistry) -> Plan {
        let origin_height = self.options.header_offset;
        let request = |strategy| ScrollRequest {
            section,
            origin_height,
            strategy,
        };

        let measured = registry
            .lookup(section)
            .map(|g| (request(Strategy::Measured), self.measured_offset(g)));
        let estimated = self
            .estimated_offset(section)
            .map(|offset| (request(Strategy::Estimated), offset));

        let ready = if self.options.use_dynamic_heights {
            measured.or(estimated)
        } else {
            estimated.or(measured)
        };

        match ready {
            Some((request, offset)) => Plan::Ready(request, offset),
            None if registry.is_pending(section) => Plan::Await(request(Strategy::Measured)),
            None => Plan::Unresolved,
        }
    }

    fn commit(
        &mut self,
        request: ScrollRequest,
        offset: f32,
        target: &mut dyn ScrollTarget,
    ) -> ScrollCommand {
        target.scroll_to_offset(offset, false);
        let command = ScrollCommand {
            section: request.section,
            offset,
            animated: false,
            strategy: request.strategy,
        };
        self.last_command = Some(command);
        jdebug!(
            section = request.section.as_str(),
            offset,
            strategy = ?request.strategy,
            "scroll committed"
        );
        if let Some(cb) = &self.options.on_scroll_to_section {
            cb(request.section);
        }
        command
    }
}
