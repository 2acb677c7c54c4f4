// Copyright 2020 @TwoCookingMice

use super::constants::{EPSILON, FLOAT_MAX, Float, Vector3f};

/// A ray with a valid parametric segment `[min_t, max_t]`.
///
/// Rays are plain values: traversal code copies them and shrinks `max_t`
/// on its own copy, so a caller's ray is never narrowed behind its back.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    pub max_t: Float
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f,
               min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d.normalize(),
               min_t: min_t.unwrap_or(0.0),
               max_t: max_t.unwrap_or(FLOAT_MAX)}
    }

    /// Ray leaving `p` along `d`, with the origin pushed `EPSILON` along
    /// the direction so it cannot re-hit the surface it starts on.
    pub fn offset_from(p: Vector3f, d: Vector3f) -> Self {
        let dir = d.normalize();
        Self { origin: p + dir * EPSILON, dir,
               min_t: 0.0,
               max_t: FLOAT_MAX }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    /// Restrict the segment to `[EPSILON, end - EPSILON]`.
    pub fn offset_segment(&mut self, end: Float) {
        self.min_t = EPSILON;
        self.max_t = end - EPSILON;
    }

    pub fn update(&mut self, t: Float) -> bool {
        if t < self.min_t || t > self.max_t {
            false
        } else {
            self.max_t = t;
            true
        }
    }

    pub fn test_segment(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.max_t
    }
}

/* Tests for Ray */
