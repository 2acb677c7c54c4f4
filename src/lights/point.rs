// Copyright @yucwang 2026

use crate::core::light::LightSource;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

pub struct PointLight {
    pub position: Vector3f,
    pub intensity: RGBSpectrum,
}

impl PointLight {
    pub fn new(position: Vector3f, intensity: RGBSpectrum) -> Self {
        Self { position, intensity }
    }
}

impl LightSource for PointLight {
    fn intensity(&self) -> RGBSpectrum {
        self.intensity
    }

    fn direction_to(&self, p: &Vector3f) -> Vector3f {
        self.position - p
    }

    fn distance_squared(&self, p: &Vector3f) -> Float {
        (self.position - p).norm_squared()
    }

    fn shadow_ray_end(&self, p: &Vector3f) -> Float {
        (self.position - p).norm()
    }
}
