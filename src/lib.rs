//! Sphere tracing of scenes built from signed distance functions.
//!
//! A [`marcher::Marcher`] owns the [`scene::Scene`] and renders frames of it into a
//! [`canvas::Canvas`]. The individual stages (distance field, marching, normals, shading) are
//! exposed as plain functions so they can be used without the engine.

pub mod canvas;
pub mod error;
pub mod lighting;
pub mod march;
pub mod marcher;
pub mod ray;
pub mod render;
pub mod scene;
pub mod vector;

pub use error::{Error, Result};
