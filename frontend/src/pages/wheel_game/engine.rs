use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::config::{ConfettiConfig, WheelTiming};
use shared::confetti;
use shared::shared_wheel_game::{Segment, SpinFrame, SpinSession, WheelConfiguration};
use yew::Callback;

use crate::base::now_ms;
use super::wheel_utils::launch_confetti;

/// Snapshot of the engine for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinView {
    pub rotation: f64,
    pub is_spinning: bool,
    pub trigger_enabled: bool,
    pub result: Option<Segment>,
}

struct SpinEngine {
    session: RefCell<SpinSession>,
    wheel: Rc<WheelConfiguration>,
    timing: WheelTiming,
    confetti: ConfettiConfig,
    rng: RefCell<SmallRng>,
    frame: RefCell<Option<AnimationFrame>>,
    reveal: RefCell<Option<Timeout>>,
    listener: RefCell<Option<Callback<SpinView>>>,
}

#[derive(Clone)]
pub struct SpinHandle(Rc<SpinEngine>);

impl PartialEq for SpinHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SpinHandle {
    pub fn new(wheel: WheelConfiguration, timing: WheelTiming, confetti: ConfettiConfig) -> Self {
        Self(Rc::new(SpinEngine {
            session: RefCell::new(SpinSession::new()),
            wheel: Rc::new(wheel),
            timing,
            confetti,
            rng: RefCell::new(SmallRng::from_entropy()),
            frame: RefCell::new(None),
            reveal: RefCell::new(None),
            listener: RefCell::new(None),
        }))
    }

    fn upgrade(weak: &Weak<SpinEngine>) -> Option<Self> {
        weak.upgrade().map(Self)
    }

    pub fn wheel(&self) -> Rc<WheelConfiguration> {
        self.0.wheel.clone()
    }

    pub fn view(&self) -> SpinView {
        let session = self.0.session.borrow();
        let result = session
            .selected_segment()
            .filter(|_| session.result_visible())
            .and_then(|index| self.0.wheel.segment(index))
            .cloned();
        SpinView {
            rotation: session.cumulative_rotation(),
            is_spinning: session.is_animating(),
            trigger_enabled: session.trigger_enabled(),
            result,
        }
    }

    /// Route view updates to `listener`, replacing any earlier one.
    pub fn subscribe(&self, listener: Callback<SpinView>) {
        *self.0.listener.borrow_mut() = Some(listener);
    }

    pub fn unsubscribe(&self) {
        self.0.listener.borrow_mut().take();
    }

    fn notify(&self) {
        let view = self.view();
        let listener = self.0.listener.borrow().clone();
        if let Some(listener) = listener {
            listener.emit(view);
        }
    }

    pub fn spin(&self) {
        let started = {
            let mut rng = self.0.rng.borrow_mut();
            self.0
                .session
                .borrow_mut()
                .begin_spin(&mut *rng, &self.0.timing, now_ms())
        };
        match started {
            Ok(_) => {
                self.notify();
                self.request_frame();
            }
            Err(err) => log::debug!("spin ignored: {}", err),
        }
    }

    /// Make the wheel playable again after a finished cycle.
    pub fn reset_for_reuse(&self) {
        let reset = self.0.session.borrow_mut().reset_for_reuse();
        match reset {
            Ok(()) => {
                self.0.reveal.borrow_mut().take();
                self.notify();
            }
            Err(err) => log::debug!("reset ignored: {}", err),
        }
    }

    fn request_frame(&self) {
        let weak = Rc::downgrade(&self.0);
        let frame = request_animation_frame(move |timestamp| {
            if let Some(handle) = Self::upgrade(&weak) {
                handle.on_frame(timestamp);
            }
        });
        *self.0.frame.borrow_mut() = Some(frame);
    }

    fn on_frame(&self, timestamp: f64) {
        let frame = self.0.session.borrow_mut().advance(&self.0.wheel, timestamp);
        match frame {
            Some(SpinFrame::Animating { .. }) => {
                self.notify();
                self.request_frame();
            }
            Some(SpinFrame::Finished { winner, .. }) => {
                log::info!("wheel stopped on {:?}", self.0.wheel.segment(winner).map(|s| &s.label));
                self.notify();
                self.schedule_reveal();
            }
            None => {}
        }
    }

    fn schedule_reveal(&self) {
        let weak = Rc::downgrade(&self.0);
        let timeout = Timeout::new(self.0.timing.result_delay_ms, move || {
            if let Some(handle) = Self::upgrade(&weak) {
                handle.show_result();
            }
        });
        *self.0.reveal.borrow_mut() = Some(timeout);
    }

    fn show_result(&self) {
        let revealed = self.0.session.borrow_mut().reveal_result();
        if revealed.is_none() {
            return;
        }
        self.notify();

        let particles = confetti::burst(&mut *self.0.rng.borrow_mut(), &self.0.confetti);
        launch_confetti(&particles);
    }
}
