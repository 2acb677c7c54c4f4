// Copyright @yucwang 2026

use thiserror::Error;

/// Failures detected while assembling a scene, before any ray is traced.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("cannot build a BVH over zero surfaces")]
    EmptyScene,
    #[error("mesh has {positions} positions but {normals} normals")]
    NormalCountMismatch { positions: usize, normals: usize },
    #[error("face {face} references vertex {index}, mesh has {count} vertices")]
    VertexIndexOutOfRange { face: usize, index: usize, count: usize },
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("sphere center must be finite, got ({0}, {1}, {2})")]
    InvalidCenter(f32, f32, f32),
}
