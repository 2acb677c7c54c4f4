// Copyright @yucwang 2023

use super::triangle::Triangle;

use crate::core::error::SceneError;
use crate::core::shader::Shader;
use crate::core::shape::Surface;
use crate::math::constants::Vector3f;

use std::sync::Arc;
use std::vec::Vec;

/// Shared vertex storage for a group of triangles.
pub struct TriangleMesh {
    positions: Vec<Vector3f>,
    normals: Option<Vec<Vector3f>>,
}

impl TriangleMesh {
    pub fn new(positions: Vec<Vector3f>, normals: Option<Vec<Vector3f>>) -> Result<Self, SceneError> {
        if let Some(normals) = &normals {
            if normals.len() != positions.len() {
                return Err(SceneError::NormalCountMismatch {
                    positions: positions.len(),
                    normals: normals.len(),
                });
            }
        }
        Ok(Self { positions, normals })
    }

    pub fn position(&self, index: usize) -> Vector3f {
        self.positions[index]
    }

    pub fn normal(&self, index: usize) -> Option<Vector3f> {
        self.normals.as_ref().and_then(|n| n.get(index)).cloned()
    }

    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Build one surface per face. Zero-area faces are dropped with a
    /// warning instead of poisoning the render with NaN normals.
    pub fn triangles(mesh: &Arc<TriangleMesh>,
                     faces: &[[usize; 3]],
                     shader: Arc<Shader>) -> Result<Vec<Surface>, SceneError> {
        let count = mesh.vertex_count();
        let mut surfaces = Vec::with_capacity(faces.len());
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= count) {
                return Err(SceneError::VertexIndexOutOfRange { face, index, count });
            }
            match Triangle::new(mesh.clone(), *indices, shader.clone()) {
                Some(triangle) => surfaces.push(Surface::Triangle(triangle)),
                None => log::warn!("Skipping degenerate triangle {} ({:?}).", face, indices),
            }
        }

        Ok(surfaces)
    }
}
