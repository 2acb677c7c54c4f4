// Copyright @yucwang 2026

use crate::core::error::SceneError;
use crate::core::interaction::IntersectionRecord;
use crate::core::shape::{Shape, Surface};
use crate::math::aabb::AABB;
use crate::math::ray::Ray3f;

use std::cmp::Ordering;

/// Largest surface range stored in a single leaf.
pub const LEAF_THRESHOLD: usize = 10;

#[derive(Clone, Debug)]
struct BVHNode {
    bounds: AABB,
    children: Option<(usize, usize)>,
    start: usize,
    end: usize,
}

impl BVHNode {
    fn leaf(bounds: AABB, start: usize, end: usize) -> Self {
        Self { bounds, children: None, start, end }
    }

    fn interior(bounds: AABB, left: usize, right: usize, start: usize, end: usize) -> Self {
        Self { bounds, children: Some((left, right)), start, end }
    }

    fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Bounding volume hierarchy owning the scene's surfaces.
///
/// Building reorders the surface array in place so every node covers a
/// contiguous range `[start, end)`. Indices handed out by intersection
/// records refer to this post-build order. Once built, the tree is only
/// read.
pub struct BVH {
    nodes: Vec<BVHNode>,
    surfaces: Vec<Surface>,
    max_leaf_size: usize,
}

impl BVH {
    pub fn new(surfaces: Vec<Surface>) -> Result<Self, SceneError> {
        Self::with_max_leaf_size(surfaces, LEAF_THRESHOLD)
    }

    pub fn with_max_leaf_size(surfaces: Vec<Surface>, max_leaf_size: usize) -> Result<Self, SceneError> {
        if surfaces.is_empty() {
            return Err(SceneError::EmptyScene);
        }

        let mut bvh = Self {
            nodes: Vec::new(),
            surfaces,
            max_leaf_size: max_leaf_size.max(1),
        };
        bvh.create_tree(0, bvh.surfaces.len());

        log::debug!("BVH built over {} surfaces: {} nodes, {} leaves, depth {}, leaf size {}.",
                    bvh.surfaces.len(), bvh.nodes.len(), bvh.leaf_count(), bvh.depth(), bvh.max_leaf_size);
        Ok(bvh)
    }

    /// Nearest hit along `ray`, or with `any_intersection` the first hit
    /// found in traversal order (enough for shadow tests).
    pub fn intersect(&self, ray: &Ray3f, any_intersection: bool) -> Option<IntersectionRecord> {
        self.intersect_node(0, *ray, any_intersection)
    }

    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<IntersectionRecord> {
        self.intersect(ray, false)
    }

    pub fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        self.intersect(ray, true).is_some()
    }

    pub fn surface(&self, index: usize) -> &Surface {
        &self.surfaces[index]
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        self.node_depth(0)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    fn node_depth(&self, node_idx: usize) -> usize {
        match self.nodes[node_idx].children {
            Some((left, right)) => 1 + self.node_depth(left).max(self.node_depth(right)),
            None => 1,
        }
    }

    // The ray is taken by value: shrinking `max_t` here never leaks into
    // the caller's copy.
    fn intersect_node(&self, node_idx: usize, mut ray: Ray3f, any_intersection: bool) -> Option<IntersectionRecord> {
        let node = &self.nodes[node_idx];
        if !node.bounds.ray_intersect(&ray) {
            return None;
        }

        let mut closest: Option<IntersectionRecord> = None;
        match node.children {
            None => {
                for idx in node.start..node.end {
                    let hit = match self.surfaces[idx].ray_intersection(&ray) {
                        Some(hit) => hit.with_surface_index(idx),
                        None => continue,
                    };
                    if closest.as_ref().map_or(true, |c| hit.t() < c.t()) {
                        if any_intersection {
                            return Some(hit);
                        }
                        ray.max_t = hit.t();
                        closest = Some(hit);
                    }
                }
            }
            Some((left, right)) => {
                for &child in [left, right].iter() {
                    if let Some(hit) = self.intersect_node(child, ray, any_intersection) {
                        if any_intersection {
                            return Some(hit);
                        }
                        if closest.as_ref().map_or(true, |c| hit.t() < c.t()) {
                            ray.max_t = hit.t();
                            closest = Some(hit);
                        }
                    }
                }
            }
        }

        closest
    }

    fn create_tree(&mut self, start: usize, end: usize) -> usize {
        let bounds = self.compute_bounds(start, end);
        if end - start <= self.max_leaf_size {
            let node_idx = self.nodes.len();
            self.nodes.push(BVHNode::leaf(bounds, start, end));
            return node_idx;
        }

        let axis = bounds.max_extent();
        self.surfaces[start..end].sort_by(|a, b| {
            a.average_position()[axis]
                .partial_cmp(&b.average_position()[axis])
                .unwrap_or(Ordering::Equal)
        });

        // Reserve the slot so the root always lands at index 0.
        let node_idx = self.nodes.len();
        self.nodes.push(BVHNode::leaf(bounds, start, end));
        let mid = (start + end) / 2;
        let left = self.create_tree(start, mid);
        let right = self.create_tree(mid, end);
        self.nodes[node_idx] = BVHNode::interior(bounds, left, right, start, end);
        node_idx
    }

    fn compute_bounds(&self, start: usize, end: usize) -> AABB {
        let mut bounds = AABB::default();
        for surface in &self.surfaces[start..end] {
            bounds.expand_by_aabb(&surface.bounding_box());
        }
        bounds
    }
}
