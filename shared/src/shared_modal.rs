use crate::config::ModalTiming;
use crate::error::GuardError;

/// Lifecycle of a dialog surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Opening,
    Open,
    Closing,
}

impl ModalState {
    /// Whether the surface takes part in layout at all.
    pub fn is_displayed(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Whether the surface carries its "shown" styling.
    pub fn is_active(&self) -> bool {
        matches!(self, ModalState::Open)
    }
}

/// A delayed completion the caller must schedule and hand back to
/// [`ModalSession::complete`] once `delay_ms` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub epoch: u64,
    pub delay_ms: u32,
    pub target: ModalState,
}

/// Page-wide background scroll lock, held by every open modal.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when this acquisition turned the lock on.
    pub fn acquire(&mut self) -> bool {
        self.holders += 1;
        self.holders == 1
    }

    /// Returns true when this release turned the lock off.
    pub fn release(&mut self) -> bool {
        if self.holders == 0 {
            return false;
        }
        self.holders -= 1;
        self.holders == 0
    }

    pub fn is_active(&self) -> bool {
        self.holders > 0
    }

    pub fn holders(&self) -> usize {
        self.holders
    }
}

/// Open/close state machine for one dialog.
///
/// Requests are accepted only from the settled states (`Closed`, `Open`).
/// Each accepted request starts a new epoch; a completion from an older epoch
/// is refused, so a superseded timer can never finish the wrong transition.
#[derive(Debug, PartialEq, Eq)]
pub struct ModalSession {
    surface_id: String,
    state: ModalState,
    epoch: u64,
    holds_lock: bool,
    bound: bool,
}

impl ModalSession {
    pub fn new(surface_id: impl Into<String>) -> Self {
        Self {
            surface_id: surface_id.into(),
            state: ModalState::Closed,
            epoch: 0,
            holds_lock: false,
            bound: true,
        }
    }

    /// Session for a surface the page does not render. It stays `Closed` and
    /// refuses every request.
    pub fn detached(surface_id: impl Into<String>) -> Self {
        Self {
            bound: false,
            ..Self::new(surface_id)
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn holds_lock(&self) -> bool {
        self.holds_lock
    }

    pub fn request_open(&mut self, timing: &ModalTiming) -> Result<PendingTransition, GuardError> {
        if !self.bound {
            return Err(GuardError::SurfaceMissing);
        }
        if self.state != ModalState::Closed {
            return Err(GuardError::ModalNotClosed);
        }
        Ok(self.begin(ModalState::Opening, ModalState::Open, timing.show_delay_ms))
    }

    pub fn request_close(&mut self, timing: &ModalTiming) -> Result<PendingTransition, GuardError> {
        if !self.bound {
            return Err(GuardError::SurfaceMissing);
        }
        if self.state != ModalState::Open {
            return Err(GuardError::ModalNotOpen);
        }
        Ok(self.begin(ModalState::Closing, ModalState::Closed, timing.hide_delay_ms))
    }

    fn begin(&mut self, via: ModalState, target: ModalState, delay_ms: u32) -> PendingTransition {
        self.epoch += 1;
        self.state = via;
        log::debug!("modal {}: {:?}", self.surface_id, via);
        PendingTransition {
            epoch: self.epoch,
            delay_ms,
            target,
        }
    }

    /// Finish the transition started in `epoch`, taking or giving back the
    /// scroll lock as the dialog settles.
    pub fn complete(&mut self, epoch: u64, lock: &mut ScrollLock) -> Result<ModalState, GuardError> {
        if epoch != self.epoch {
            return Err(GuardError::StaleTransition);
        }
        self.state = match self.state {
            ModalState::Opening => {
                if !self.holds_lock {
                    lock.acquire();
                    self.holds_lock = true;
                }
                ModalState::Open
            }
            ModalState::Closing => {
                self.give_back(lock);
                ModalState::Closed
            }
            ModalState::Open | ModalState::Closed => return Err(GuardError::StaleTransition),
        };
        log::debug!("modal {}: {:?}", self.surface_id, self.state);
        Ok(self.state)
    }

    /// Drop any hold on the lock, e.g. when the page tears the dialog down.
    pub fn give_back(&mut self, lock: &mut ScrollLock) {
        if self.holds_lock {
            lock.release();
            self.holds_lock = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(session: &mut ModalSession, lock: &mut ScrollLock) {
        let pending = session.request_open(&ModalTiming::default()).unwrap();
        session.complete(pending.epoch, lock).unwrap();
    }

    #[test]
    fn test_open_locks_only_after_delay() {
        let timing = ModalTiming::default();
        let mut lock = ScrollLock::new();
        let mut session = ModalSession::new("contactModal");

        let pending = session.request_open(&timing).unwrap();
        assert_eq!(pending.delay_ms, 10);
        assert_eq!(pending.target, ModalState::Open);
        assert_eq!(session.state(), ModalState::Opening);
        assert!(session.state().is_displayed());
        assert!(!session.state().is_active());
        assert!(!lock.is_active());

        assert_eq!(session.complete(pending.epoch, &mut lock), Ok(ModalState::Open));
        assert!(session.state().is_active());
        assert!(lock.is_active());
    }

    #[test]
    fn test_close_unlocks_only_after_delay() {
        let timing = ModalTiming::default();
        let mut lock = ScrollLock::new();
        let mut session = ModalSession::new("wheelModal");
        open(&mut session, &mut lock);

        let pending = session.request_close(&timing).unwrap();
        assert_eq!(pending.delay_ms, 300);
        assert_eq!(session.state(), ModalState::Closing);
        assert!(session.state().is_displayed());
        assert!(lock.is_active());

        assert_eq!(session.complete(pending.epoch, &mut lock), Ok(ModalState::Closed));
        assert!(!session.state().is_displayed());
        assert!(!lock.is_active());
        assert!(!session.holds_lock());
    }

    #[test]
    fn test_requests_from_wrong_state_are_ignored() {
        let timing = ModalTiming::default();
        let mut lock = ScrollLock::new();
        let mut session = ModalSession::new("contactModal");

        assert_eq!(session.request_close(&timing), Err(GuardError::ModalNotOpen));
        assert_eq!(session.state(), ModalState::Closed);

        let pending = session.request_open(&timing).unwrap();
        assert_eq!(session.request_open(&timing), Err(GuardError::ModalNotClosed));
        assert_eq!(session.request_close(&timing), Err(GuardError::ModalNotOpen));
        assert_eq!(session.state(), ModalState::Opening);

        session.complete(pending.epoch, &mut lock).unwrap();
        assert_eq!(session.request_open(&timing), Err(GuardError::ModalNotClosed));

        session.request_close(&timing).unwrap();
        assert_eq!(session.request_close(&timing), Err(GuardError::ModalNotOpen));
        assert_eq!(session.request_open(&timing), Err(GuardError::ModalNotClosed));
        assert_eq!(session.state(), ModalState::Closing);
    }

    #[test]
    fn test_stale_completion_is_refused() {
        let timing = ModalTiming::default();
        let mut lock = ScrollLock::new();
        let mut session = ModalSession::new("wheelModal");

        let first = session.request_open(&timing).unwrap();
        session.complete(first.epoch, &mut lock).unwrap();
        let closing = session.request_close(&timing).unwrap();

        // The opening timer firing late must not touch the close in flight
        assert_eq!(session.complete(first.epoch, &mut lock), Err(GuardError::StaleTransition));
        assert_eq!(session.state(), ModalState::Closing);

        session.complete(closing.epoch, &mut lock).unwrap();
        assert_eq!(session.complete(closing.epoch, &mut lock), Err(GuardError::StaleTransition));
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn test_lock_is_counted_across_modals() {
        let timing = ModalTiming::default();
        let mut lock = ScrollLock::new();
        let mut contact = ModalSession::new("contactModal");
        let mut wheel = ModalSession::new("wheelModal");

        open(&mut contact, &mut lock);
        open(&mut wheel, &mut lock);
        assert_eq!(lock.holders(), 2);

        let pending = contact.request_close(&timing).unwrap();
        contact.complete(pending.epoch, &mut lock).unwrap();
        assert!(lock.is_active());

        let pending = wheel.request_close(&timing).unwrap();
        wheel.complete(pending.epoch, &mut lock).unwrap();
        assert!(!lock.is_active());
    }

    #[test]
    fn test_scroll_lock_transitions() {
        let mut lock = ScrollLock::new();
        assert!(!lock.release());
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(!lock.release());
        assert!(lock.release());
        assert!(!lock.is_active());
    }

    #[test]
    fn test_give_back_on_teardown() {
        let mut lock = ScrollLock::new();
        let mut session = ModalSession::new("contactModal");
        open(&mut session, &mut lock);

        session.give_back(&mut lock);
        session.give_back(&mut lock);
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn test_detached_surface_refuses_requests() {
        let timing = ModalTiming::default();
        let mut lock = ScrollLock::new();
        let mut session = ModalSession::detached("wheelModal");
        assert!(!session.is_bound());
        assert!(ModalSession::new("wheelModal").is_bound());

        assert_eq!(session.request_open(&timing), Err(GuardError::SurfaceMissing));
        assert_eq!(session.request_close(&timing), Err(GuardError::SurfaceMissing));
        assert_eq!(session.state(), ModalState::Closed);
        assert_eq!(session.complete(1, &mut lock), Err(GuardError::StaleTransition));
        assert!(!lock.is_active());
    }
}
