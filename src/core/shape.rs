// Copyright @yucwang 2023

use crate::core::interaction::IntersectionRecord;
use crate::core::shader::Shader;
use crate::math::aabb::AABB;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;
use crate::shapes::sphere::Sphere;
use crate::shapes::triangle::Triangle;

pub trait Shape: Send + Sync {
    fn bounding_box(&self) -> AABB;
    /// Centroid used to order primitives when the BVH splits a node.
    fn average_position(&self) -> Vector3f;
    /// Hit with `t` inside the ray's segment. The record's surface index is
    /// left for the caller to fill in.
    fn ray_intersection(&self, ray: &Ray3f) -> Option<IntersectionRecord>;

    fn min_bound(&self) -> Vector3f {
        self.bounding_box().p_min
    }

    fn max_bound(&self) -> Vector3f {
        self.bounding_box().p_max
    }
}

/// Every primitive kind the tracer knows about. New kinds get a variant here
/// and an arm in each dispatch below.
pub enum Surface {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Surface {
    pub fn shader(&self) -> &Shader {
        match self {
            Surface::Sphere(sphere) => sphere.shader(),
            Surface::Triangle(triangle) => triangle.shader(),
        }
    }
}

impl Shape for Surface {
    fn bounding_box(&self) -> AABB {
        match self {
            Surface::Sphere(sphere) => sphere.bounding_box(),
            Surface::Triangle(triangle) => triangle.bounding_box(),
        }
    }

    fn average_position(&self) -> Vector3f {
        match self {
            Surface::Sphere(sphere) => sphere.average_position(),
            Surface::Triangle(triangle) => triangle.average_position(),
        }
    }

    fn ray_intersection(&self, ray: &Ray3f) -> Option<IntersectionRecord> {
        match self {
            Surface::Sphere(sphere) => sphere.ray_intersection(ray),
            Surface::Triangle(triangle) => triangle.ray_intersection(ray),
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl From<Triangle> for Surface {
    fn from(triangle: Triangle) -> Self {
        Surface::Triangle(triangle)
    }
}
