// Copyright 2020 @TwoCookingMice

use super::constants::{ Vector3f,
                       FLOAT_MIN, FLOAT_MAX };
use super::ray::{ Ray3f };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB {
    pub p_min: Vector3f,
    pub p_max: Vector3f
}

impl Default for AABB {
    fn default() -> Self {
        Self { p_min: Vector3f::new(FLOAT_MAX, FLOAT_MAX, FLOAT_MAX),
               p_max: Vector3f::new(FLOAT_MIN, FLOAT_MIN, FLOAT_MIN) }
    }
}

impl AABB {
    pub fn new(p_min: Vector3f, p_max: Vector3f) -> Self {
        let mut min = Vector3f::new(0.0, 0.0, 0.0);
        let mut max = Vector3f::new(0.0, 0.0, 0.0);
        for idx in 0..3 {
            min[idx] = p_min[idx].min(p_max[idx]);
            max[idx] = p_max[idx].max(p_min[idx]);
        }
        Self { p_min: min, p_max: max }
    }

    pub fn center(&self) -> Vector3f {
        0.5 * self.p_min + 0.5 * self.p_max
    }

    pub fn expand_by_point(&mut self, p: &Vector3f) {
        for idx in 0..3 {
            self.p_min[idx] = self.p_min[idx].min(p[idx]);
            self.p_max[idx] = self.p_max[idx].max(p[idx]);
        }
    }

    pub fn expand_by_aabb(&mut self, other: &AABB) {
        for idx in 0..3 {
            self.p_min[idx] = self.p_min[idx].min(other.p_min[idx]);
            self.p_max[idx] = self.p_max[idx].max(other.p_max[idx]);
        }
    }

    /// Slab test against the ray's current `[min_t, max_t]` segment.
    ///
    /// Zero direction components are not special-cased: the division yields
    /// ±inf, or NaN when the origin lies exactly on a slab plane. `min`/`max`
    /// drop a single NaN, so a grazing ray misses a box of nonzero width on
    /// that axis. When both bounds are NaN, as for the zero-thickness box of
    /// a flat triangle with the origin in its plane, the axis is skipped and
    /// the box can report a hit; the primitive test rejects it.
    pub fn ray_intersect(&self, ray: &Ray3f) -> bool {
        if !self.is_valid() {
            return false;
        }

        let o = ray.origin();
        let d = ray.dir();
        let mut t_enter = ray.min_t;
        let mut t_exit = ray.max_t;

        for idx in 0..3 {
            let t0 = (self.p_min[idx] - o[idx]) / d[idx];
            let t1 = (self.p_max[idx] - o[idx]) / d[idx];

            t_enter = t_enter.max(t0.min(t1));
            t_exit = t_exit.min(t0.max(t1));
        }

        t_enter <= t_exit
    }

    pub fn diagonal(&self) -> Vector3f {
        self.p_max - self.p_min
    }

    /// Widest axis. An axis wins only when strictly wider than both others;
    /// otherwise x is returned.
    pub fn max_extent(&self) -> usize {
        let d = self.diagonal();
        if d[0] > d[1] && d[0] > d[2] {
            0
        } else if d[1] > d[0] && d[1] > d[2] {
            1
        } else if d[2] > d[0] && d[2] > d[1] {
            2
        } else {
            0
        }
    }

    pub fn contains(&self, other: &AABB) -> bool {
        (0..3).all(|idx| self.p_min[idx] <= other.p_min[idx] && self.p_max[idx] >= other.p_max[idx])
    }

    pub fn is_valid(&self) -> bool {
        (0..3).all(|idx| self.p_min[idx] <= self.p_max[idx])
    }
}

/* Test for AABB */
