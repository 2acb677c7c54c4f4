// Copyright @yucwang 2026

use crate::core::light::LightSource;
use crate::math::constants::{Float, Vector3f, FLOAT_MAX};
use crate::math::spectrum::RGBSpectrum;

/// Light arriving from infinitely far away along `direction`. There is no
/// distance falloff.
pub struct DirectionalLight {
    pub direction: Vector3f,
    pub intensity: RGBSpectrum,
}

impl DirectionalLight {
    pub fn new(direction: Vector3f, intensity: RGBSpectrum) -> Self {
        let len = direction.norm();
        let direction = if len > 0.0 { direction / len } else { Vector3f::new(0.0, 0.0, -1.0) };
        Self { direction, intensity }
    }
}

impl LightSource for DirectionalLight {
    fn intensity(&self) -> RGBSpectrum {
        self.intensity
    }

    fn direction_to(&self, _p: &Vector3f) -> Vector3f {
        -self.direction
    }

    fn distance_squared(&self, _p: &Vector3f) -> Float {
        1.0
    }

    fn shadow_ray_end(&self, _p: &Vector3f) -> Float {
        FLOAT_MAX
    }
}
