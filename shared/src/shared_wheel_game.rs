use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WheelTiming;
use crate::constants::BOUNDARY_EPSILON;
use crate::error::{ConfigError, GuardError};

/// Fill colour of a wheel segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Navy,
    Orange,
}

impl ColorToken {
    pub fn css(&self) -> &'static str {
        match self {
            ColorToken::Navy => "#1a2332",
            ColorToken::Orange => "#ff8a00",
        }
    }
}

/// One slice of the wheel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub color: ColorToken,
    pub value: u32, // discount in percent
}

impl Segment {
    pub fn new(label: impl Into<String>, color: ColorToken, value: u32) -> Self {
        Self {
            label: label.into(),
            color,
            value,
        }
    }
}

/// The eight discount slices the site ships with, alternating navy and orange.
pub fn default_segments() -> Vec<Segment> {
    (1..=8u32)
        .map(|i| {
            let value = i * 5;
            let color = if i % 2 == 1 { ColorToken::Navy } else { ColorToken::Orange };
            Segment::new(format!("{}%", value), color, value)
        })
        .collect()
}

/// Cubic ease-out: fast start, decelerating to a stop.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Extra rotation in radians for one spin, from two uniform draws in `[0, 1)`.
///
/// `turns_unit` picks the whole number of turns in `[min_spins, max_spins)`,
/// `fraction_unit` adds the final partial turn.
pub fn spin_rotation(turns_unit: f64, fraction_unit: f64, timing: &WheelTiming) -> f64 {
    let turns = turns_unit * (timing.max_spins - timing.min_spins) + timing.min_spins;
    (turns + fraction_unit) * TAU
}

/// A wedge as it should be painted for a given rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge<'a> {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub segment: &'a Segment,
}

impl Wedge<'_> {
    /// Angle the label is rotated to, halfway through the wedge.
    pub fn label_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Immutable list of segments laid out in order around the full circle.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfiguration {
    segments: Vec<Segment>,
}

impl WheelConfiguration {
    pub fn new(segments: Vec<Segment>) -> Result<Self, ConfigError> {
        if segments.is_empty() {
            return Err(ConfigError::EmptyWheel);
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_angle(&self) -> f64 {
        TAU / self.segments.len() as f64
    }

    /// Wedges for a wheel turned by `rotation` radians.
    ///
    /// Angle 0 is the top of the wheel and angles grow clockwise; wedge `i`
    /// starts at `rotation + i * segment_angle`. The result depends on nothing
    /// but the arguments, so it can be painted before any spin.
    pub fn layout(&self, rotation: f64) -> Vec<Wedge<'_>> {
        let sweep = self.segment_angle();
        self.segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let start_angle = rotation + index as f64 * sweep;
                Wedge {
                    index,
                    start_angle,
                    end_angle: start_angle + sweep,
                    segment,
                }
            })
            .collect()
    }

    /// Index of the wedge under the fixed pointer at the top.
    ///
    /// The wheel turns under a stationary pointer, so the pointer sits at
    /// `-rotation` in wheel coordinates. A landing exactly on a boundary goes
    /// to the wedge that starts there.
    pub fn winning_index(&self, rotation: f64) -> usize {
        let normalized = rotation.rem_euclid(TAU);
        let pointer = (TAU - normalized).rem_euclid(TAU);

        let mut slot = pointer / self.segment_angle();
        let nearest = slot.round();
        if (slot - nearest).abs() < BOUNDARY_EPSILON {
            slot = nearest;
        }

        (slot.floor() as usize) % self.segments.len()
    }
}

impl Default for WheelConfiguration {
    fn default() -> Self {
        Self {
            segments: default_segments(),
        }
    }
}

/// The timed part of a spin: where it started and how far it will go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub start_angle: f64,
    pub total_rotation: f64,
    pub started_at_ms: f64,
    pub duration_ms: f64,
}

impl SpinAnimation {
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn angle_at(&self, now_ms: f64) -> f64 {
        self.start_angle + self.total_rotation * ease_out_cubic(self.progress(now_ms))
    }

    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.total_rotation
    }
}

/// What a frame step produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinFrame {
    Animating { rotation: f64 },
    Finished { rotation: f64, winner: usize },
}

/// State of the promotional wheel across spin cycles.
///
/// One spin per cycle: `has_spun` closes the gate and only
/// [`SpinSession::reset_for_reuse`] reopens it. `cumulative_rotation` never
/// goes back, so a reused wheel keeps turning from where it stopped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinSession {
    cumulative_rotation: f64,
    has_spun: bool,
    is_animating: bool,
    selected_segment: Option<usize>,
    result_visible: bool,
    animation: Option<SpinAnimation>,
}

impl SpinSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cumulative_rotation(&self) -> f64 {
        self.cumulative_rotation
    }

    pub fn has_spun(&self) -> bool {
        self.has_spun
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn selected_segment(&self) -> Option<usize> {
        self.selected_segment
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    pub fn animation(&self) -> Option<&SpinAnimation> {
        self.animation.as_ref()
    }

    /// Whether the spin button should accept a press.
    pub fn trigger_enabled(&self) -> bool {
        !self.is_animating && !self.has_spun
    }

    fn check_can_spin(&self) -> Result<(), GuardError> {
        if self.is_animating {
            return Err(GuardError::SpinInProgress);
        }
        if self.has_spun {
            return Err(GuardError::AlreadySpun);
        }
        Ok(())
    }

    /// Start a spin with a random target. The only randomness in a cycle is
    /// drawn here; the winner follows from where the wheel stops.
    pub fn begin_spin<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        timing: &WheelTiming,
        now_ms: f64,
    ) -> Result<SpinAnimation, GuardError> {
        self.check_can_spin()?;
        let total = spin_rotation(rng.gen::<f64>(), rng.gen::<f64>(), timing);
        self.begin_spin_with_rotation(total, timing.duration_ms as f64, now_ms)
    }

    pub fn begin_spin_with_rotation(
        &mut self,
        total_rotation: f64,
        duration_ms: f64,
        now_ms: f64,
    ) -> Result<SpinAnimation, GuardError> {
        self.check_can_spin()?;

        let animation = SpinAnimation {
            start_angle: self.cumulative_rotation,
            total_rotation,
            started_at_ms: now_ms,
            duration_ms,
        };
        self.is_animating = true;
        self.has_spun = true;
        self.result_visible = false;
        self.animation = Some(animation);

        log::debug!(
            "spin started: {:.3} rad over {} ms",
            total_rotation,
            duration_ms
        );
        Ok(animation)
    }

    /// Move the animation to `now_ms`. Returns `None` when nothing is spinning.
    pub fn advance(&mut self, wheel: &WheelConfiguration, now_ms: f64) -> Option<SpinFrame> {
        let animation = self.animation?;

        if animation.progress(now_ms) < 1.0 {
            self.cumulative_rotation = animation.angle_at(now_ms);
            return Some(SpinFrame::Animating {
                rotation: self.cumulative_rotation,
            });
        }

        let rotation = animation.end_angle();
        let winner = wheel.winning_index(rotation);
        self.cumulative_rotation = rotation;
        self.is_animating = false;
        self.animation = None;
        self.selected_segment = Some(winner);

        log::debug!("spin finished on segment {}", winner);
        Some(SpinFrame::Finished { rotation, winner })
    }

    /// Mark the result as presented. Returns the winning index if there is one
    /// to show.
    pub fn reveal_result(&mut self) -> Option<usize> {
        if self.is_animating || !self.has_spun {
            return None;
        }
        let winner = self.selected_segment?;
        self.result_visible = true;
        Some(winner)
    }

    /// Reopen the one-shot gate for another cycle.
    ///
    /// Rotation and the previous winner are kept; the next spin overwrites the
    /// winner and continues from the current angle.
    pub fn reset_for_reuse(&mut self) -> Result<(), GuardError> {
        if self.is_animating {
            return Err(GuardError::SpinInProgress);
        }
        if !self.has_spun {
            return Err(GuardError::NothingToReset);
        }
        self.has_spun = false;
        self.result_visible = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    fn wheel() -> WheelConfiguration {
        WheelConfiguration::default()
    }

    fn finish(session: &mut SpinSession, wheel: &WheelConfiguration) -> (f64, usize) {
        let end = session.animation().map(|a| a.started_at_ms + a.duration_ms).unwrap();
        match session.advance(wheel, end) {
            Some(SpinFrame::Finished { rotation, winner }) => (rotation, winner),
            other => panic!("expected finished frame, got {:?}", other),
        }
    }

    #[test]
    fn test_default_segments() {
        let wheel = wheel();
        let values: Vec<u32> = wheel.segments().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![5, 10, 15, 20, 25, 30, 35, 40]);
        assert_eq!(wheel.segment(0).unwrap().label, "5%");
        assert_eq!(wheel.segment(0).unwrap().color, ColorToken::Navy);
        assert_eq!(wheel.segment(1).unwrap().color, ColorToken::Orange);
    }

    #[test]
    fn test_empty_wheel_rejected() {
        assert_eq!(WheelConfiguration::new(Vec::new()), Err(ConfigError::EmptyWheel));
    }

    #[test]
    fn test_layout_partitions_circle() {
        for n in 1..=12u32 {
            let segments = (0..n)
                .map(|i| Segment::new(i.to_string(), ColorToken::Navy, i))
                .collect();
            let wheel = WheelConfiguration::new(segments).unwrap();
            for rotation in [0.0, 1.234, -3.0, 40.0 * PI] {
                let wedges = wheel.layout(rotation);
                assert_eq!(wedges.len(), n as usize);
                assert!((wedges[0].start_angle - rotation).abs() < 1e-12);

                let total: f64 = wedges.iter().map(Wedge::sweep).sum();
                assert!((total - TAU).abs() < 1e-9);

                for pair in wedges.windows(2) {
                    assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
                    assert!((pair[0].sweep() - pair[1].sweep()).abs() < 1e-9);
                }
                let last = wedges.last().unwrap();
                assert!((last.end_angle - (rotation + TAU)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_label_angle_is_mid_wedge() {
        let wheel = wheel();
        let wedges = wheel.layout(0.0);
        assert!((wedges[0].label_angle() - PI / 8.0).abs() < 1e-12);
        assert_eq!(wedges[3].segment.value, 20);
    }

    #[test]
    fn test_winning_index_boundaries() {
        let wheel = wheel();
        let sweep = wheel.segment_angle();

        assert_eq!(wheel.winning_index(0.0), 0);
        assert_eq!(wheel.winning_index(TAU), 0);
        assert_eq!(wheel.winning_index(6.0 * TAU), 0);
        assert_eq!(wheel.winning_index(TAU - 1e-6), 0);
        assert_eq!(wheel.winning_index(1e-6), 7);

        for k in 1..8 {
            assert_eq!(wheel.winning_index(k as f64 * sweep), 8 - k);
            assert_eq!(wheel.winning_index(3.0 * TAU + k as f64 * sweep), 8 - k);
        }

        // Just inside wedge 5 from both sides
        assert_eq!(wheel.winning_index(TAU - 5.5 * sweep), 5);
        assert_eq!(wheel.winning_index(-5.5 * sweep), 5);
    }

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert!(ease_out_cubic(0.25) > 0.25);
    }

    #[test]
    fn test_spin_rotation_range() {
        let timing = WheelTiming::default();
        assert!((spin_rotation(0.0, 0.0, &timing) - 5.0 * TAU).abs() < 1e-9);
        assert!((spin_rotation(0.5, 0.25, &timing) - 7.75 * TAU).abs() < 1e-9);
        assert!(spin_rotation(0.999_999, 0.999_999, &timing) < 11.0 * TAU);
    }

    #[test]
    fn test_animation_follows_ease_out() {
        let wheel = wheel();
        let mut session = SpinSession::new();
        session.begin_spin_with_rotation(4.0 * TAU, 4000.0, 1000.0).unwrap();

        match session.advance(&wheel, 3000.0) {
            Some(SpinFrame::Animating { rotation }) => {
                assert!((rotation - 4.0 * TAU * 0.875).abs() < 1e-9);
            }
            other => panic!("unexpected frame {:?}", other),
        }
        assert!(session.is_animating());
        assert_eq!(session.selected_segment(), None);

        // A clock that runs backwards never rewinds past the start
        match session.advance(&wheel, 0.0) {
            Some(SpinFrame::Animating { rotation }) => assert_eq!(rotation, 0.0),
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[test]
    fn test_spin_is_one_shot() {
        let wheel = wheel();
        let timing = WheelTiming::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = SpinSession::new();

        let animation = session.begin_spin(&mut rng, &timing, 0.0).unwrap();
        assert!(!session.trigger_enabled());

        let before = session.clone();
        assert_eq!(
            session.begin_spin(&mut rng, &timing, 10.0),
            Err(GuardError::SpinInProgress)
        );
        assert_eq!(session, before);

        finish(&mut session, &wheel);
        assert!(!session.is_animating());
        assert!((session.cumulative_rotation() - animation.end_angle()).abs() < 1e-12);

        let before = session.clone();
        assert_eq!(
            session.begin_spin(&mut rng, &timing, 5000.0),
            Err(GuardError::AlreadySpun)
        );
        assert_eq!(session, before);
        assert_eq!(session.advance(&wheel, 6000.0), None);
    }

    #[test]
    fn test_six_turns_lands_on_first_segment() {
        let wheel = wheel();
        let mut session = SpinSession::new();
        session.begin_spin_with_rotation(6.0 * TAU, 4000.0, 0.0).unwrap();

        let (_, winner) = finish(&mut session, &wheel);
        assert_eq!(winner, 0);
        assert_eq!(session.selected_segment(), Some(0));
        assert_eq!(wheel.segment(winner).unwrap().value, 5);
    }

    #[test]
    fn test_selected_segment_matches_pointer() {
        let wheel = wheel();
        let sweep = wheel.segment_angle();
        let mut session = SpinSession::new();
        // Pointer ends a quarter of the way into wedge 2
        session
            .begin_spin_with_rotation(5.0 * TAU - 2.25 * sweep, 4000.0, 0.0)
            .unwrap();
        let (_, winner) = finish(&mut session, &wheel);
        assert_eq!(winner, 2);
        assert_eq!(wheel.segment(winner).unwrap().value, 15);
    }

    #[test]
    fn test_reveal_result() {
        let wheel = wheel();
        let mut session = SpinSession::new();
        assert_eq!(session.reveal_result(), None);

        session.begin_spin_with_rotation(TAU, 100.0, 0.0).unwrap();
        assert_eq!(session.reveal_result(), None);

        finish(&mut session, &wheel);
        assert_eq!(session.reveal_result(), Some(0));
        assert!(session.result_visible());
    }

    #[test]
    fn test_reset_for_reuse() {
        let wheel = wheel();
        let timing = WheelTiming::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = SpinSession::new();

        assert_eq!(session.reset_for_reuse(), Err(GuardError::NothingToReset));
        assert_eq!(session, SpinSession::new());

        session.begin_spin(&mut rng, &timing, 0.0).unwrap();
        assert_eq!(session.reset_for_reuse(), Err(GuardError::SpinInProgress));
        assert!(session.has_spun());

        finish(&mut session, &wheel);
        session.reveal_result();
        let first_rotation = session.cumulative_rotation();
        let first_winner = session.selected_segment();

        session.reset_for_reuse().unwrap();
        assert!(!session.has_spun());
        assert!(!session.result_visible());
        assert!(session.trigger_enabled());
        assert_eq!(session.selected_segment(), first_winner);
        assert_eq!(session.cumulative_rotation(), first_rotation);

        let second = session.begin_spin(&mut rng, &timing, 10_000.0).unwrap();
        assert_eq!(second.start_angle, first_rotation);
        let (rotation, winner) = finish(&mut session, &wheel);
        assert!(rotation > first_rotation);
        assert_eq!(session.selected_segment(), Some(winner));
    }

    #[test]
    fn test_reveal_after_reset_is_refused() {
        let wheel = wheel();
        let mut session = SpinSession::new();
        session.begin_spin_with_rotation(TAU, 100.0, 0.0).unwrap();
        finish(&mut session, &wheel);

        session.reset_for_reuse().unwrap();
        assert_eq!(session.reveal_result(), None);
        assert!(!session.result_visible());
        assert_eq!(session.selected_segment(), Some(0));
    }

    #[test]
    fn test_winners_are_uniform() {
        let wheel = wheel();
        let timing = WheelTiming::default();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut session = SpinSession::new();
        let mut counts = [0usize; 8];
        let spins = 10_000;

        for i in 0..spins {
            let now = i as f64 * 10_000.0;
            session.begin_spin(&mut rng, &timing, now).unwrap();
            let (_, winner) = finish(&mut session, &wheel);
            counts[winner] += 1;
            session.reset_for_reuse().unwrap();
        }

        let expected = spins as f64 / 8.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // 7 degrees of freedom, 0.01% critical value
        assert!(chi_square < 29.88, "counts {:?}, chi^2 {}", counts, chi_square);
        for count in counts {
            assert!((count as f64 - expected).abs() < expected * 0.15);
        }
    }
}
