// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

/// Parallel projection: every ray shares the view direction and the origin
/// moves across a `view_height` tall film centered on `origin`.
pub struct OrthographicCamera {
    origin: Vector3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    half_height: Float,
    half_width: Float,
    bitmap: Bitmap,
}

impl OrthographicCamera {
    pub fn new(origin: Vector3f,
               target: Vector3f,
               up: Vector3f,
               view_height: Float,
               width: usize,
               height: usize) -> Self {
        let forward = (target - origin).normalize();
        let right = forward.cross(&up).normalize();
        let up = right.cross(&forward).normalize();
        let aspect = width.max(1) as Float / height.max(1) as Float;

        Self {
            origin,
            forward,
            right,
            up,
            half_height: 0.5 * view_height,
            half_width: 0.5 * view_height * aspect,
            bitmap: Bitmap::new(width, height),
        }
    }
}

impl Sensor for OrthographicCamera {
    fn sample_ray(&self, u: &Vector2f) -> Ray3f {
        let px = (2.0 * u.x - 1.0) * self.half_width;
        let py = (1.0 - 2.0 * u.y) * self.half_height;
        let origin = self.origin + self.right * px + self.up * py;
        Ray3f::new(origin, self.forward, None, None)
    }

    fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    fn bitmap_mut(&mut self) -> &mut Bitmap {
        &mut self.bitmap
    }

    fn describe(&self) -> String {
        format!("OrthographicCamera: {}x{}, view height {}",
                self.bitmap.width(), self.bitmap.height(), 2.0 * self.half_height)
    }
}
