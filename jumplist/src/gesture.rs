use crate::SectionId;

/// Debounce state for one continuous strip gesture.
///
/// Consecutive touches that resolve to the same section are admitted once; the state is reset
/// when the touch ends or when a selection is made programmatically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureState {
    last_selected: Option<SectionId>,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_selected(&self) -> Option<SectionId> {
        self.last_selected
    }

    pub fn is_active(&self) -> bool {
        self.last_selected.is_some()
    }

    /// Records `section` and returns `true` if it differs from the previous admitted one.
    pub fn admit(&mut self, section: SectionId) -> bool {
        if self.last_selected == Some(section) {
            return false;
        }
        self.last_selected = Some(section);
        true
    }

    pub fn reset(&mut self) {
        self.last_selected = None;
    }
}
