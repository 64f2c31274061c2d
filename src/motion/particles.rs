use rand::Rng;

pub const PARTICLE_COUNT: usize = 50;

/// One ambient particle. Sizes are in px, timings in seconds; the looping
/// animation itself is declared in CSS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {x:.0}px; top: {y:.0}px; animation-duration: {duration:.2}s; animation-delay: {delay:.2}s",
            size = self.size,
            x = self.x,
            y = self.y,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// Scatters `count` particles over a `width × height` area, every attribute
/// drawn independently.
pub fn generate_with_rng<R: Rng + ?Sized>(
    count: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size: rng.gen::<f64>() * 4.0 + 2.0,
            x: rng.gen::<f64>() * width.max(0.0),
            y: rng.gen::<f64>() * height.max(0.0),
            duration: rng.gen::<f64>() * 20.0 + 10.0,
            delay: rng.gen::<f64>() * 5.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn test_particles_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let particles = generate_with_rng(PARTICLE_COUNT, 1280.0, 720.0, &mut rng);

        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((2.0..6.0).contains(&p.size));
            assert!((0.0..1280.0).contains(&p.x));
            assert!((0.0..720.0).contains(&p.y));
            assert!((10.0..30.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = generate_with_rng(5, 100.0, 100.0, &mut SmallRng::seed_from_u64(42));
        let b = generate_with_rng(5, 100.0, 100.0, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_ne!(a[0], a[1]);
    }

    #[test]
    fn test_degenerate_viewport() {
        let mut rng = SmallRng::seed_from_u64(1);
        let particles = generate_with_rng(3, -10.0, 0.0, &mut rng);
        assert!(particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    #[test]
    fn test_style_string() {
        let p = Particle {
            size: 3.5,
            x: 10.4,
            y: 20.6,
            duration: 12.0,
            delay: 0.25,
        };
        assert_eq!(
            p.style(),
            "width: 3.50px; height: 3.50px; left: 10px; top: 21px; animation-duration: 12.00s; animation-delay: 0.25s"
        );
    }
}
