use crate::vector::Vec3;

#[derive(Debug, Clone)]
pub struct Ray {
    pub position: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Construct a new ray. The direction is used as given; callers normalize it when they need
    /// travelled distances in world units.
    pub fn new(position: Vec3, direction: Vec3) -> Ray {
        Ray {
            position,
            direction,
        }
    }

    /// The point `amount` along the ray from its origin.
    #[inline]
    pub fn at(&self, amount: f32) -> Vec3 {
        self.position + self.direction * amount
    }
}

#[test]
fn test_at() {
    let ray = Ray::new(Vec3::new(0., 1., 0.), Vec3::new(0., 0., 1.));
    assert_eq!(Vec3::new(0., 1., 0.), ray.at(0.));
    assert_eq!(Vec3::new(0., 1., 2.5), ray.at(2.5));
}
