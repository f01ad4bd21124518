/// The highlight state of a drop zone.
///
/// A zone starts out [`ZoneState::Idle`], lights up while something is dragged over it and goes back to idle as
/// soon as the drag leaves or the payload is dropped. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZoneState {
    /// Nothing is being dragged over the zone.
    #[default]
    Idle,

    /// A drag gesture is currently over the zone.
    Hovering,
}

/// The drag gestures a zone reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gesture {
    DragOver,
    DragLeave,
    Drop,
}

impl ZoneState {
    /// Whether the highlight should be shown.
    pub fn is_hovering(self) -> bool {
        matches!(self, ZoneState::Hovering)
    }

    pub(crate) fn after(self, gesture: Gesture) -> Self {
        match gesture {
            Gesture::DragOver => ZoneState::Hovering,
            Gesture::DragLeave | Gesture::Drop => ZoneState::Idle,
        }
    }
}
