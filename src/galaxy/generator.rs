use crate::prelude::*;
use bevy::prelude::*;
use rand::prelude::*;
use rayon::prelude::*;
use std::f32::consts::TAU;

/// The positions making up one generated galaxy. Regenerated wholesale on
/// every commit; indices carry no identity across regenerations.
pub struct ParticleSet {
    positions: Vec<Vec3>,
}

impl ParticleSet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}

/// Scatters `params.count` particles over `params.branches` spiral arms.
///
/// Each particle draws a uniform distance from the center, is assigned an arm
/// by index modulo, and gets twisted around the y axis proportionally to that
/// distance. The result lies entirely in the y = 0 plane within
/// `params.radius` of the origin.
pub fn generate(params: &GalaxyParams) -> ParticleSet {
    let mut positions = vec![Vec3::ZERO; params.count as usize];

    positions
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, position)| {
            let mut rng = rand::rng();
            *position = sample_branch_position(params, index, &mut rng);
        });

    ParticleSet { positions }
}

/// Base angle of the arm that particle `index` belongs to.
pub fn branch_angle(index: usize, branches: u32) -> f32 {
    (index as u32 % branches) as f32 / branches as f32 * TAU
}

fn sample_branch_position(params: &GalaxyParams, index: usize, rng: &mut ThreadRng) -> Vec3 {
    let radius_distance = rng.random::<f32>() * params.radius;

    // Farther particles receive proportionally more twist, which is what
    // turns straight arms into spirals.
    let spin_angle = radius_distance * params.spin;
    let angle = branch_angle(index, params.branches) + spin_angle;

    vec3(angle.cos(), 0.0, angle.sin()) * radius_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn output_length_matches_count() {
        let params = GalaxyParams {
            count: 1_000,
            ..default()
        };
        assert_eq!(generate(&params).len(), 1_000);
    }

    #[test]
    fn zero_count_yields_empty_set() {
        let params = GalaxyParams {
            count: 0,
            ..default()
        };
        let set = generate(&params);
        assert!(set.is_empty());
        assert_eq!(set.positions().len(), 0);
    }

    #[test]
    fn particles_stay_in_flat_disk() {
        let params = GalaxyParams {
            count: 5_000,
            radius: 7.5,
            ..default()
        };
        for position in generate(&params).positions() {
            assert_eq!(position.y, 0.0);
            assert!(position.xz().length() <= params.radius + EPS);
        }
    }

    #[test]
    fn zero_spin_partitions_particles_into_branch_sectors() {
        // 12 particles over 3 arms with no spin: 4 per arm, base angles
        // 0, 2pi/3 and 4pi/3.
        let params = GalaxyParams {
            count: 12,
            branches: 3,
            spin: 0.0,
            radius: 5.0,
            ..default()
        };
        for (index, position) in generate(&params).positions().iter().enumerate() {
            let expected = branch_angle(index, params.branches);
            let distance = position.xz().length();
            assert!((position.x - expected.cos() * distance).abs() < EPS);
            assert!((position.z - expected.sin() * distance).abs() < EPS);
        }
    }

    #[test]
    fn branch_assignment_is_even_by_index() {
        let branches = 4u32;
        let count = 4096usize;
        let mut per_branch = vec![0usize; branches as usize];
        for index in 0..count {
            per_branch[index % branches as usize] += 1;
        }
        for tally in per_branch {
            assert_eq!(tally, count / branches as usize);
        }
    }

    #[test]
    fn zero_radius_collapses_to_origin() {
        let params = GalaxyParams {
            count: 64,
            radius: 0.0,
            ..default()
        };
        for position in generate(&params).positions() {
            assert_eq!(*position, Vec3::ZERO);
        }
    }

    #[test]
    fn regeneration_preserves_length_and_invariants() {
        let params = GalaxyParams {
            count: 2_000,
            spin: 3.0,
            ..default()
        };
        let first = generate(&params);
        let second = generate(&params);
        assert_eq!(first.len(), second.len());
        for position in second.positions() {
            assert_eq!(position.y, 0.0);
            assert!(position.xz().length() <= params.radius + EPS);
        }
    }
}
