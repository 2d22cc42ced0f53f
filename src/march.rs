use crate::{ray::Ray, scene::Scene, vector::Vec3};

#[derive(Debug, Clone)]
pub struct MarchConfig {
    /// The most steps a single march may take.
    pub max_steps: u32,

    /// The surface threshold: a step shorter than this counts as a hit.
    pub min_dist: f32,

    /// Marches that travel further than this count as misses.
    pub max_dist: f32,

    /// The offset used when differencing the distance field to find normals.
    pub normal_epsilon: f32,

    /// The factor applied to the diffuse term of a light that is occluded.
    pub shadow_factor: f32,
}

impl Default for MarchConfig {
    fn default() -> Self {
        MarchConfig {
            max_steps: 100,
            min_dist: 0.01,
            max_dist: 100.0,
            normal_epsilon: 0.01,
            shadow_factor: 0.1,
        }
    }
}

impl MarchConfig {
    /// Returns `true` when a distance returned by [`march`] indicates that nothing was hit.
    #[inline]
    pub fn is_miss(&self, distance: f32) -> bool {
        distance > self.max_dist
    }
}

/// March `ray` through the scene, returning the total distance traveled. The march stops when it
/// gets within `min_dist` of a surface, travels further than `max_dist`, or runs out of steps.
pub fn march(config: &MarchConfig, scene: &Scene, ray: &Ray) -> f32 {
    let mut traveled = 0.;

    for _ in 0..config.max_steps {
        let radius = scene.sdf(&ray.at(traveled));
        traveled += radius;

        if traveled > config.max_dist || radius < config.min_dist {
            break;
        }
    }

    traveled
}

/// Estimate the surface normal at `point` from the gradient of the distance field.
pub fn normal(config: &MarchConfig, scene: &Scene, point: &Vec3) -> Vec3 {
    let dist = scene.sdf(point);
    let e = config.normal_epsilon;

    let step = |offset: Vec3| dist - scene.sdf(&(*point - offset));

    Vec3::new(
        step(Vec3::new(e, 0., 0.)),
        step(Vec3::new(0., e, 0.)),
        step(Vec3::new(0., 0., e)),
    )
    .normalized()
}
