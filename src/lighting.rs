use crate::{
    canvas::Color,
    march::{self, MarchConfig},
    ray::Ray,
    scene::{Light, Scene},
    vector::Vec3,
};

/// Compute the light arriving at `point`, which must lie on a surface, from every light in the
/// scene. Contributions are summed without clamping.
pub fn shade(config: &MarchConfig, scene: &Scene, point: &Vec3) -> Color {
    let normal = march::normal(config, scene, point);

    scene
        .lights()
        .iter()
        .map(|light| light.color * diffuse(config, scene, point, &normal, light))
        .sum()
}

/// The diffuse term for a single light, attenuated by `shadow_factor` when something lies
/// between the point and the light.
pub fn diffuse(
    config: &MarchConfig,
    scene: &Scene,
    point: &Vec3,
    normal: &Vec3,
    light: &Light,
) -> f32 {
    let lightv = (light.position - *point).normalized();
    let term = normal.dot(&lightv).clamp(0., 1.);

    if in_shadow(config, scene, point, normal, light) {
        term * config.shadow_factor
    } else {
        term
    }
}

/// Returns `true` when there is an object between the point and the light.
pub fn in_shadow(
    config: &MarchConfig,
    scene: &Scene,
    point: &Vec3,
    normal: &Vec3,
    light: &Light,
) -> bool {
    // Move the start away from the surface so that the march doesn't end immediately.
    let start = *point + *normal * (config.min_dist * 2.);
    let lightv = (light.position - *point).normalized();
    let dist_to_light = (light.position - *point).length();

    march::march(config, scene, &Ray::new(start, lightv)) < dist_to_light
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Object;
    use approx::assert_abs_diff_eq;

    fn overhead_light() -> Light {
        Light::new(Vec3::new(0., 5., 0.), Color::new(1., 0.5, 0.))
    }

    #[test]
    fn test_unoccluded() {
        let config = MarchConfig::default();
        let mut scene = Scene::new();
        scene.add_light(overhead_light());

        let color = shade(&config, &scene, &Vec3::zeros());
        assert_abs_diff_eq!(1., color.r, epsilon = 1e-5);
        assert_abs_diff_eq!(0.5, color.g, epsilon = 1e-5);
        assert_eq!(0., color.b);
    }

    #[test]
    fn test_shadow_attenuates() {
        let config = MarchConfig::default();
        let light = overhead_light();
        let point = Vec3::zeros();
        let normal = Vec3::new(0., 1., 0.);

        let mut scene = Scene::new();
        scene.add_light(light.clone());
        let lit = diffuse(&config, &scene, &point, &normal, &light);
        assert!(!in_shadow(&config, &scene, &point, &normal, &light));
        let lit_color = shade(&config, &scene, &point);
        assert_abs_diff_eq!(1., lit_color.r, epsilon = 1e-5);

        scene.add_object(Object::cuboid(Vec3::new(0., 2.5, 0.), Vec3::splat(0.5)));
        let shadowed = diffuse(&config, &scene, &point, &normal, &light);
        assert!(in_shadow(&config, &scene, &point, &normal, &light));

        assert_abs_diff_eq!(lit * config.shadow_factor, shadowed, epsilon = 1e-6);

        // The occluder doesn't change the surface normal at the point.
        let color = shade(&config, &scene, &point);
        assert_abs_diff_eq!(0.1, color.r, epsilon = 1e-5);
        assert_abs_diff_eq!(lit_color.g * config.shadow_factor, color.g, epsilon = 1e-5);
    }

    #[test]
    fn test_light_behind_surface() {
        let config = MarchConfig::default();
        let light = Light::new(Vec3::new(0., -5., 0.), Color::white());
        let normal = Vec3::new(0., 1., 0.);
        let scene = Scene::new();

        assert_eq!(0., diffuse(&config, &scene, &Vec3::zeros(), &normal, &light));
    }

    #[test]
    fn test_lights_are_additive() {
        let config = MarchConfig::default();
        let mut scene = Scene::new();
        scene.add_light(Light::new(Vec3::new(0., 5., 0.), Color::new(2., 0., 0.)));
        scene.add_light(Light::new(Vec3::new(0., 10., 0.), Color::new(1., 1., 0.)));

        let color = shade(&config, &scene, &Vec3::zeros());
        assert_abs_diff_eq!(3., color.r, epsilon = 1e-5);
        assert_abs_diff_eq!(1., color.g, epsilon = 1e-5);
    }

    #[test]
    fn test_no_lights_is_black() {
        let config = MarchConfig::default();
        let scene = Scene::new();
        assert!(shade(&config, &scene, &Vec3::zeros()).is_black());
    }
}
