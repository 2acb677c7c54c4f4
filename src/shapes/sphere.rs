// Copyright @yucwang 2026

use crate::core::error::SceneError;
use crate::core::interaction::IntersectionRecord;
use crate::core::shader::Shader;
use crate::core::shape::Shape;
use crate::math::aabb::AABB;
use crate::math::constants::{ Float, Vector3f };
use crate::math::ray::Ray3f;

use std::sync::Arc;

pub struct Sphere {
    center: Vector3f,
    radius: Float,
    shader: Arc<Shader>,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float, shader: Arc<Shader>) -> Result<Self, SceneError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !center.iter().all(|c| c.is_finite()) {
            return Err(SceneError::InvalidCenter(center.x, center.y, center.z));
        }
        Ok(Self { center, radius, shader })
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    pub fn shader(&self) -> &Shader {
        &self.shader
    }
}

impl Shape for Sphere {
    fn bounding_box(&self) -> AABB {
        let r = Vector3f::new(self.radius, self.radius, self.radius);
        AABB::new(self.center - r, self.center + r)
    }

    fn average_position(&self) -> Vector3f {
        self.center
    }

    fn ray_intersection(&self, ray: &Ray3f) -> Option<IntersectionRecord> {
        let p = ray.origin() - self.center;
        let d = ray.dir();

        let dd = d.dot(&d);
        let dp = d.dot(&p);
        let discriminant = dp * dp - dd * (p.dot(&p) - self.radius * self.radius);
        if discriminant < 0.0 {
            return None;
        }

        // Smaller root first; the far root only matters for rays that start
        // inside the sphere, e.g. refracted rays through glass.
        let sqrt_disc = discriminant.sqrt();
        let mut t = (-dp - sqrt_disc) / dd;
        if !ray.test_segment(t) {
            t = (-dp + sqrt_disc) / dd;
            if !ray.test_segment(t) {
                return None;
            }
        }

        let hit = ray.at(t);
        let normal = (hit - self.center).normalize();
        Some(IntersectionRecord::new(hit, normal, t))
    }
}
