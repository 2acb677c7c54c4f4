// Copyright @yucwang 2026

use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::Vector2f;
use crate::math::spectrum::RGBSpectrum;

pub trait Integrator: Sync {
    /// Radiance for the pixel whose top-left corner is `pixel`, already
    /// averaged over all of its samples.
    fn trace_pixel(&self, scene: &Scene, sensor: &dyn Sensor, pixel: Vector2f) -> RGBSpectrum;
    fn samples_per_pixel(&self) -> u32;
    fn describe(&self) -> String {
        String::from("Integrator")
    }
    /// Counters gathered so far, if the integrator keeps any.
    fn summary(&self) -> Option<String> {
        None
    }
}
