use crate::{
    canvas::{Canvas, Color},
    error::{Error, Result},
    lighting,
    march::{self, MarchConfig},
    ray::Ray,
    scene::Scene,
    vector::{Vec2, Vec3},
};

/// The fixed position of the camera.
pub const CAMERA_ORIGIN: [f32; 3] = [0., 1., 0.];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidResolution { width, height });
        }
        Ok(Self { width, height })
    }

    fn as_vec(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    jobs: usize,
    march: MarchConfig,
}

impl Config {
    pub fn new(jobs: usize) -> Self {
        Config {
            jobs: jobs.max(1),
            march: MarchConfig::default(),
        }
    }

    pub fn with_march(mut self, march: MarchConfig) -> Self {
        self.march = march;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn march(&self) -> &MarchConfig {
        &self.march
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(num_cpus::get())
    }
}

/// The camera ray through pixel `(x, y)`, where `y = 0` is the top row of the image. Pixels
/// outside the resolution extend the same mapping past the edges of the frame.
pub fn camera_ray(resolution: &Resolution, x: u32, y: u32) -> Ray {
    let res = resolution.as_vec();
    let pos = Vec2::new(x as f32 + 0.5, res.y - y as f32 + 0.5);
    let uv = (pos - res * 0.5) / res.y;

    Ray::new(
        Vec3::from(CAMERA_ORIGIN),
        Vec3::new(uv.x, uv.y, 1.).normalized(),
    )
}

/// Compute the color seen along `ray`.
pub fn trace(config: &MarchConfig, scene: &Scene, ray: &Ray) -> Color {
    let dist = march::march(config, scene, ray);
    if config.is_miss(dist) {
        return Color::black();
    }

    lighting::shade(config, scene, &ray.at(dist))
}

/// Render every pixel of the frame. Rows are split into contiguous bands, one per job, and the
/// result does not depend on the number of jobs.
pub fn render(config: &Config, scene: &Scene, resolution: Resolution) -> Result<Canvas> {
    let mut canvas = Canvas::new(resolution.width, resolution.height);

    let height = resolution.height as usize;
    let rows_per_band = (height + config.jobs - 1) / config.jobs;
    let bands = canvas.bands_mut(rows_per_band);

    crossbeam::thread::scope(|s| {
        for (band, pixels) in bands.enumerate() {
            let first_row = band * rows_per_band;
            s.spawn(move |_| {
                render_band(config.march(), scene, &resolution, first_row, pixels)
            });
        }
    })
    .map_err(|_| Error::WorkerPanicked)?;

    Ok(canvas)
}

fn render_band(
    config: &MarchConfig,
    scene: &Scene,
    resolution: &Resolution,
    first_row: usize,
    pixels: &mut [Color],
) {
    let width = resolution.width as usize;
    for (ix, pixel) in pixels.iter_mut().enumerate() {
        let x = (ix % width) as u32;
        let y = (first_row + ix / width) as u32;
        *pixel = trace(config, scene, &camera_ray(resolution, x, y));
    }
}
