use crate::{
    canvas::Color,
    error::{Error, Result},
    vector::Vec3,
};

/// The distance reported when there are no objects in the scene, before the ground plane is
/// considered.
pub const EMPTY_DISTANCE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LightId(usize);

impl ObjectId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl LightId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A point light.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub position: Vec3,

    /// An RGB tint, not limited to `[0, 1]`.
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// A sphere whose radius is `size.x`.
    Sphere,

    /// A box with half-extents `size`.
    Box,
}

/// A primitive solid placed in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// The center of the object.
    pub position: Vec3,
    pub size: Vec3,
    pub kind: ObjectKind,
}

impl Object {
    pub fn new(position: Vec3, size: Vec3, kind: ObjectKind) -> Self {
        Self {
            position,
            size,
            kind,
        }
    }

    pub fn sphere(position: Vec3, radius: f32) -> Self {
        Self::new(position, Vec3::splat(radius), ObjectKind::Sphere)
    }

    pub fn cuboid(position: Vec3, half_extents: Vec3) -> Self {
        Self::new(position, half_extents, ObjectKind::Box)
    }

    /// The signed distance from `point` to the surface of this object. Spheres are always
    /// centered on the origin; boxes are evaluated relative to `position`.
    pub fn distance(&self, point: &Vec3) -> f32 {
        match self.kind {
            ObjectKind::Sphere => point.length() - self.size.x,
            ObjectKind::Box => {
                let q = (*point - self.position).abs() - self.size;
                q.max_scalar(0.).length() + q.max_component().min(0.)
            }
        }
    }
}

/// The lights and objects that make up the world. Both lists keep insertion order, and the id
/// returned when adding an entry stays valid until the scene is reset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    lights: Vec<Light>,
    objects: Vec<Object>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_light(&mut self, light: Light) -> LightId {
        let id = LightId(self.lights.len());
        self.lights.push(light);
        id
    }

    pub fn add_object(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }

    /// Replace the light at `id`.
    pub fn modify_light(&mut self, LightId(index): LightId, light: Light) -> Result<()> {
        let len = self.lights.len();
        let slot = self.lights.get_mut(index).ok_or(Error::OutOfRange {
            kind: "light",
            index,
            len,
        })?;
        *slot = light;
        Ok(())
    }

    /// Replace the object at `id`.
    pub fn modify_object(&mut self, ObjectId(index): ObjectId, object: Object) -> Result<()> {
        let len = self.objects.len();
        let slot = self.objects.get_mut(index).ok_or(Error::OutOfRange {
            kind: "object",
            index,
            len,
        })?;
        *slot = object;
        Ok(())
    }

    /// Remove all lights and objects.
    pub fn reset(&mut self) {
        self.lights.clear();
        self.objects.clear();
    }

    #[inline]
    pub fn light(&self, LightId(id): LightId) -> Option<&Light> {
        self.lights.get(id)
    }

    #[inline]
    pub fn object(&self, ObjectId(id): ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// The signed distance from `point` to the closest surface in the scene, including the
    /// ground plane at `y = 0`.
    pub fn sdf(&self, point: &Vec3) -> f32 {
        let closest = self
            .objects
            .iter()
            .fold(EMPTY_DISTANCE, |acc, object| acc.min(object.distance(point)));
        closest.min(point.y)
    }
}
