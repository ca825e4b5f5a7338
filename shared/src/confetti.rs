use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ConfettiConfig;
use crate::constants::CONFETTI_COLORS;

/// One falling piece of the result celebration
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub color: &'static str,
    pub left_percent: f64,
    pub rotation_deg: f64,
    pub duration_ms: u32,
}

pub fn burst<R: Rng + ?Sized>(rng: &mut R, config: &ConfettiConfig) -> Vec<Particle> {
    (0..config.count)
        .map(|_| Particle {
            color: CONFETTI_COLORS.choose(rng).copied().unwrap_or(CONFETTI_COLORS[0]),
            left_percent: rng.gen_range(0.0..100.0),
            rotation_deg: rng.gen_range(0.0..360.0),
            duration_ms: config
                .min_duration_ms
                .saturating_add(rng.gen_range(0..config.max_extra_duration_ms.max(1))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_burst_stays_in_bounds() {
        let config = ConfettiConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let particles = burst(&mut rng, &config);

        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!(CONFETTI_COLORS.contains(&p.color));
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!((0.0..360.0).contains(&p.rotation_deg));
            assert!((2000..3000).contains(&p.duration_ms));
        }
    }

    #[test]
    fn test_zero_extra_duration() {
        let config = ConfettiConfig {
            count: 3,
            min_duration_ms: 500,
            max_extra_duration_ms: 0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(burst(&mut rng, &config).iter().all(|p| p.duration_ms == 500));
    }

    #[test]
    fn test_duration_saturates() {
        let config = ConfettiConfig {
            count: 5,
            min_duration_ms: u32::MAX,
            max_extra_duration_ms: 1000,
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(burst(&mut rng, &config).iter().all(|p| p.duration_ms == u32::MAX));
    }
}
