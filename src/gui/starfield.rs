use nalgebra::{Point3, Vector3};
use rand::Rng;

use crate::config::StarfieldConfig;

/// Scatters stars uniformly through a box centered on the origin.
pub fn scatter<R: Rng + ?Sized>(config: &StarfieldConfig, rng: &mut R) -> Vec<Point3<f32>> {
    let half = config.extent / 2.0;
    (0..config.count)
        .map(|_| {
            let unit = Vector3::new(
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0f32),
            );
            Point3::from(unit.component_mul(&half))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_stars_stay_in_the_box() {
        let config = StarfieldConfig {
            count: 500,
            extent: Vector3::new(10.0, 20.0, 40.0),
        };
        let mut rng = StdRng::seed_from_u64(11);
        let stars = scatter(&config, &mut rng);

        assert_eq!(stars.len(), 500);
        for star in &stars {
            assert!(star.x.abs() <= 5.0);
            assert!(star.y.abs() <= 10.0);
            assert!(star.z.abs() <= 20.0);
        }
        // Not all piled up in one spot
        assert!(stars.iter().any(|s| s.z > 10.0));
        assert!(stars.iter().any(|s| s.z < -10.0));
    }

    #[test]
    fn test_empty_starfield() {
        let config = StarfieldConfig {
            count: 0,
            ..StarfieldConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(scatter(&config, &mut rng).is_empty());
    }
}
