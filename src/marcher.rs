use std::{
    ops::Deref,
    sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Duration,
};

use log::{debug, trace};

use crate::{
    canvas::{Canvas, Color},
    error::Result,
    render::{self, Config, Resolution},
    scene::{Light, LightId, Object, ObjectId, ObjectKind, Scene},
    vector::Vec3,
};

/// Owns a [`Scene`] and renders frames of it.
///
/// Render passes hold a [`SceneLease`] for their whole duration. Any number of leases may be
/// held at once, but scene mutations wait until every lease has been released, and new leases
/// wait for a mutation in progress to finish. A frame therefore always sees one consistent
/// version of the scene.
#[derive(Debug)]
pub struct Marcher {
    config: Config,
    scene: RwLock<Scene>,
    resolution: Mutex<Option<Resolution>>,
}

/// Shared read access to the scene of a [`Marcher`]. Mutations block while this is alive.
pub struct SceneLease<'a> {
    guard: RwLockReadGuard<'a, Scene>,
}

impl Deref for SceneLease<'_> {
    type Target = Scene;

    fn deref(&self) -> &Scene {
        &self.guard
    }
}

impl Default for Marcher {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Marcher {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scene: RwLock::new(Scene::new()),
            resolution: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take a read lease on the scene.
    pub fn lease(&self) -> SceneLease<'_> {
        // Every mutation is a single push, assignment or clear, so a panic while holding the
        // lock can't leave the scene half-written.
        let guard = self.scene.read().unwrap_or_else(PoisonError::into_inner);
        SceneLease { guard }
    }

    fn scene_mut(&self) -> RwLockWriteGuard<'_, Scene> {
        self.scene.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current scene.
    pub fn snapshot(&self) -> Scene {
        self.lease().clone()
    }

    pub fn add_object(&self, position: Vec3, size: Vec3, kind: ObjectKind) -> ObjectId {
        let id = self
            .scene_mut()
            .add_object(Object::new(position, size, kind));
        debug!("added {:?} {:?} at {:?}", kind, id, position);
        id
    }

    pub fn add_light(&self, position: Vec3, color: Color) -> LightId {
        let id = self.scene_mut().add_light(Light::new(position, color));
        debug!("added light {:?} at {:?}", id, position);
        id
    }

    pub fn modify_object(&self, id: ObjectId, object: Object) -> Result<()> {
        self.scene_mut().modify_object(id, object)?;
        debug!("modified object {:?}", id);
        Ok(())
    }

    pub fn modify_light(&self, id: LightId, light: Light) -> Result<()> {
        self.scene_mut().modify_light(id, light)?;
        debug!("modified light {:?}", id);
        Ok(())
    }

    /// Remove every object and light from the scene.
    pub fn reset(&self) {
        self.scene_mut().reset();
        debug!("scene reset");
    }

    /// Record the resolution of the frame about to be rendered.
    pub fn on_frame_start(&self, width: u32, height: u32) -> Result<Resolution> {
        let resolution = Resolution::new(width, height)?;
        *self
            .resolution
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(resolution);
        Ok(resolution)
    }

    /// The resolution recorded by the last call to [`Marcher::on_frame_start`].
    pub fn resolution(&self) -> Option<Resolution> {
        *self
            .resolution
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Render a frame at `resolution`. `elapsed` is the time since the previous frame; the
    /// current scenes are static, so it does not affect the image.
    pub fn render_frame(&self, resolution: Resolution, elapsed: Duration) -> Result<Canvas> {
        trace!(
            "rendering {}x{} frame, {:?} since last frame",
            resolution.width,
            resolution.height,
            elapsed
        );
        let scene = self.lease();
        render::render(&self.config, &scene, resolution)
    }

    /// Render a frame at the resolution recorded by [`Marcher::on_frame_start`], or return
    /// `None` if no frame has been started.
    pub fn render(&self, elapsed: Duration) -> Option<Result<Canvas>> {
        self.resolution()
            .map(|resolution| self.render_frame(resolution, elapsed))
    }
}
