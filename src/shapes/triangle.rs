// Copyright @yucwang 2023

use super::triangle_mesh::TriangleMesh;

use crate::core::interaction::IntersectionRecord;
use crate::core::shader::Shader;
use crate::core::shape::Shape;
use crate::math::aabb::AABB;
use crate::math::constants::{ Float, Vector3f };
use crate::math::ray::Ray3f;

use std::sync::Arc;

/// One face of a `TriangleMesh`.
///
/// The edge differences `v0 - v1` and `v0 - v2` are cached at construction;
/// moving the mesh vertices afterwards is not supported.
pub struct Triangle {
    mesh: Arc<TriangleMesh>,
    indices: [usize; 3],
    edge0: Vector3f,
    edge1: Vector3f,
    flat_normal: Option<Vector3f>,
    shader: Arc<Shader>,
}

impl Triangle {
    /// Returns `None` for a zero-area face, whose normal would be NaN.
    /// Indices must already be validated against the mesh.
    pub fn new(mesh: Arc<TriangleMesh>, indices: [usize; 3], shader: Arc<Shader>) -> Option<Self> {
        let p0 = mesh.position(indices[0]);
        let p1 = mesh.position(indices[1]);
        let p2 = mesh.position(indices[2]);

        let face_normal = (p1 - p0).cross(&(p2 - p0)).normalize();
        if !face_normal.iter().all(|c| c.is_finite()) {
            return None;
        }

        let flat_normal = if mesh.has_normals() { None } else { Some(face_normal) };
        Some(Triangle {
            edge0: p0 - p1,
            edge1: p0 - p2,
            flat_normal,
            mesh,
            indices,
            shader,
        })
    }

    pub fn vertices(&self) -> (Vector3f, Vector3f, Vector3f) {
        (self.mesh.position(self.indices[0]),
         self.mesh.position(self.indices[1]),
         self.mesh.position(self.indices[2]))
    }

    pub fn shader(&self) -> &Shader {
        &self.shader
    }

    fn shading_normal(&self, beta: Float, gamma: Float) -> Vector3f {
        if let Some(n) = self.flat_normal {
            return n;
        }
        let n0 = self.mesh.normal(self.indices[0]).unwrap_or_else(Vector3f::zeros);
        let n1 = self.mesh.normal(self.indices[1]).unwrap_or_else(Vector3f::zeros);
        let n2 = self.mesh.normal(self.indices[2]).unwrap_or_else(Vector3f::zeros);
        (n0 * (1.0 - beta - gamma) + n1 * beta + n2 * gamma).normalize()
    }
}

impl Shape for Triangle {
    fn bounding_box(&self) -> AABB {
        let (p0, p1, p2) = self.vertices();
        let mut bound = AABB::new(p0, p1);
        bound.expand_by_point(&p2);

        bound
    }

    fn average_position(&self) -> Vector3f {
        let (p0, p1, p2) = self.vertices();
        (p0 + p1 + p2) / 3.0
    }

    /// Cramer's rule on `o + t d = v0 + beta (v1 - v0) + gamma (v2 - v0)`.
    /// Only strictly interior hits count; a zero determinant produces NaN
    /// and falls out of the comparisons.
    fn ray_intersection(&self, ray: &Ray3f) -> Option<IntersectionRecord> {
        let v0 = self.mesh.position(self.indices[0]);
        let (a, b, c) = (self.edge0.x, self.edge0.y, self.edge0.z);
        let (d, e, f) = (self.edge1.x, self.edge1.y, self.edge1.z);

        let dir = ray.dir();
        let (g, h, i) = (dir.x, dir.y, dir.z);
        let origin = ray.origin();
        let (j, k, l) = (v0.x - origin.x, v0.y - origin.y, v0.z - origin.z);

        let ei_hf = e * i - h * f;
        let gf_di = g * f - d * i;
        let dh_eg = d * h - e * g;
        let ak_jb = a * k - j * b;
        let jc_al = j * c - a * l;
        let bl_kc = b * l - k * c;

        let m = a * ei_hf + b * gf_di + c * dh_eg;

        let t = -(f * ak_jb + e * jc_al + d * bl_kc) / m;
        if !ray.test_segment(t) {
            return None;
        }

        let beta = (j * ei_hf + k * gf_di + l * dh_eg) / m;
        let gamma = (i * ak_jb + h * jc_al + g * bl_kc) / m;
        if !(beta > 0.0 && gamma > 0.0 && beta + gamma < 1.0) {
            return None;
        }

        Some(IntersectionRecord::new(ray.at(t), self.shading_normal(beta, gamma), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_mesh() -> Arc<TriangleMesh> {
        Arc::new(TriangleMesh::new(vec![Vector3f::new(0.0, 0.0, 0.0),
                                        Vector3f::new(1.0, 0.0, 0.0),
                                        Vector3f::new(0.0, 1.0, 0.0)],
                                   None).unwrap())
    }

    fn down_ray(x: Float, y: Float) -> Ray3f {
        Ray3f::new(Vector3f::new(x, y, 2.0), Vector3f::new(0.0, 0.0, -1.0), None, None)
    }

    #[test]
    fn test_bounding_box() {
        let mesh = Arc::new(TriangleMesh::new(vec![Vector3f::new(1.0, 1.0, 1.0),
                                                   Vector3f::new(1.5, 4.0, -1.0),
                                                   Vector3f::new(-1.0, 2.0, 2.5)],
                                              None).unwrap());
        let triangle = Triangle::new(mesh, [0, 1, 2], Arc::new(Shader::default())).unwrap();
        let bounding_box = triangle.bounding_box();

        assert_eq!(bounding_box.p_min, Vector3f::new(-1.0, 1.0, -1.0));
        assert_eq!(bounding_box.p_max, Vector3f::new(1.5, 4.0, 2.5));
        assert!((triangle.average_position() - Vector3f::new(0.5, 7.0 / 3.0, 2.5 / 3.0)).norm() < 1e-5);
    }

    #[test]
    fn test_interior_hit_uses_flat_normal() {
        let triangle = Triangle::new(flat_mesh(), [0, 1, 2], Arc::new(Shader::default())).unwrap();
        let hit = triangle.ray_intersection(&down_ray(0.25, 0.25)).expect("expected a hit");

        assert!((hit.t() - 2.0).abs() < 1e-5);
        assert!((hit.p() - Vector3f::new(0.25, 0.25, 0.0)).norm() < 1e-5);
        assert!((hit.normal() - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn test_edges_and_outside_are_rejected() {
        let triangle = Triangle::new(flat_mesh(), [0, 1, 2], Arc::new(Shader::default())).unwrap();

        assert!(triangle.ray_intersection(&down_ray(0.8, 0.8)).is_none());
        assert!(triangle.ray_intersection(&down_ray(0.5, 0.0)).is_none());
        assert!(triangle.ray_intersection(&down_ray(0.0, 0.5)).is_none());
        assert!(triangle.ray_intersection(&down_ray(-0.1, 0.2)).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let triangle = Triangle::new(flat_mesh(), [0, 1, 2], Arc::new(Shader::default())).unwrap();
        let ray = Ray3f::new(Vector3f::new(-1.0, 0.25, 0.0), Vector3f::new(1.0, 0.0, 0.0), None, None);
        assert!(triangle.ray_intersection(&ray).is_none());
    }

    #[test]
    fn test_vertex_normals_are_blended() {
        let mesh = Arc::new(TriangleMesh::new(
            vec![Vector3f::new(0.0, 0.0, 0.0),
                 Vector3f::new(1.0, 0.0, 0.0),
                 Vector3f::new(0.0, 1.0, 0.0)],
            Some(vec![Vector3f::new(0.0, 0.0, 1.0),
                      Vector3f::new(1.0, 0.0, 0.0),
                      Vector3f::new(0.0, 0.0, 1.0)])).unwrap());
        let triangle = Triangle::new(mesh, [0, 1, 2], Arc::new(Shader::default())).unwrap();

        // beta = 0.5, gamma = 0.25: 0.25 * n0 + 0.5 * n1 + 0.25 * n2
        let hit = triangle.ray_intersection(&down_ray(0.5, 0.25)).expect("expected a hit");
        let expected = Vector3f::new(0.5, 0.0, 0.5).normalize();
        assert!((hit.normal() - expected).norm() < 1e-5);
    }

    #[test]
    fn test_degenerate_triangle_is_rejected() {
        let mesh = Arc::new(TriangleMesh::new(vec![Vector3f::new(0.0, 0.0, 0.0),
                                                   Vector3f::new(1.0, 1.0, 1.0),
                                                   Vector3f::new(2.0, 2.0, 2.0)],
                                              None).unwrap());
        assert!(Triangle::new(mesh, [0, 1, 2], Arc::new(Shader::default())).is_none());
    }
}
