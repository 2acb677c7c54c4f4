// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector3f };

/// Nearest accepted hit along a ray.
///
/// `surface_index` is a non-owning handle into the surface array of the
/// BVH that produced the record; it is only meaningful for that BVH.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionRecord {
    p: Vector3f,
    normal: Vector3f,
    t: Float,
    surface_index: usize,
}

impl IntersectionRecord {
    pub fn new(new_p: Vector3f,
               new_normal: Vector3f,
               new_t: Float) -> Self {
        Self { p: new_p, normal: new_normal, t: new_t, surface_index: 0 }
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn surface_index(&self) -> usize {
        self.surface_index
    }

    pub fn with_surface_index(mut self, surface_index: usize) -> Self {
        self.surface_index = surface_index;
        self
    }
}
