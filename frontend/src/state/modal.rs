#[derive(Debug, Clone, PartialEq)]
pub enum ModalPhase {
    Editing,
    InFlight,
    Failed(String),
}

/// Which modal a resource page shows. At most one is open at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Add(ModalPhase),
    Edit(T, ModalPhase),
    ConfirmDelete(T, ModalPhase),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T: Clone> ModalState<T> {
    pub fn is_closed(&self) -> bool {
        matches!(self, ModalState::Closed)
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self, ModalState::Add(_) | ModalState::Edit(..))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ModalState::Edit(..))
    }

    pub fn is_confirming_delete(&self) -> bool {
        matches!(self, ModalState::ConfirmDelete(..))
    }

    pub fn phase(&self) -> Option<&ModalPhase> {
        match self {
            ModalState::Closed => None,
            ModalState::Add(phase)
            | ModalState::Edit(_, phase)
            | ModalState::ConfirmDelete(_, phase) => Some(phase),
        }
    }

    fn phase_mut(&mut self) -> Option<&mut ModalPhase> {
        match self {
            ModalState::Closed => None,
            ModalState::Add(phase)
            | ModalState::Edit(_, phase)
            | ModalState::ConfirmDelete(_, phase) => Some(phase),
        }
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            ModalState::Edit(target, _) | ModalState::ConfirmDelete(target, _) => Some(target),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.phase(), Some(ModalPhase::InFlight))
    }

    pub fn error(&self) -> Option<String> {
        match self.phase() {
            Some(ModalPhase::Failed(message)) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn open_add(&mut self) -> bool {
        self.open(ModalState::Add(ModalPhase::Editing))
    }

    pub fn open_edit(&mut self, target: T) -> bool {
        self.open(ModalState::Edit(target, ModalPhase::Editing))
    }

    pub fn open_delete(&mut self, target: T) -> bool {
        self.open(ModalState::ConfirmDelete(target, ModalPhase::Editing))
    }

    fn open(&mut self, next: ModalState<T>) -> bool {
        if !self.is_closed() {
            return false;
        }
        *self = next;
        true
    }

    /// Enters the in-flight phase. Refused when closed or already in flight.
    pub fn begin_request(&mut self) -> bool {
        match self.phase_mut() {
            Some(phase) if *phase != ModalPhase::InFlight => {
                *phase = ModalPhase::InFlight;
                true
            }
            _ => false,
        }
    }

    pub fn succeed(&mut self) {
        if self.in_flight() {
            *self = ModalState::Closed;
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        if let Some(phase) = self.phase_mut() {
            if *phase == ModalPhase::InFlight {
                *phase = ModalPhase::Failed(message.into());
            }
        }
    }

    /// Drops a previous failure message and returns to editing.
    pub fn clear_error(&mut self) {
        if let Some(phase) = self.phase_mut() {
            if matches!(phase, ModalPhase::Failed(_)) {
                *phase = ModalPhase::Editing;
            }
        }
    }

    /// Closes the modal unless a request is still outstanding.
    pub fn cancel(&mut self) -> bool {
        if self.in_flight() {
            return false;
        }
        *self = ModalState::Closed;
        true
    }
}
