// Copyright @yucwang 2026

use crate::core::interaction::IntersectionRecord;
use crate::core::light::LightSource;
use crate::core::scene::Scene;
use crate::core::shader::Shade;
use crate::integrators::whitted::RayTracer;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Diffuse plus a Blinn-style highlight around the half vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Phong {
    pub diffuse_color: RGBSpectrum,
    pub specular_color: RGBSpectrum,
    pub exponent: Float,
}

impl Phong {
    pub fn new(diffuse_color: RGBSpectrum, specular_color: RGBSpectrum, exponent: Float) -> Self {
        Self { diffuse_color, specular_color, exponent }
    }
}

impl Shade for Phong {
    fn shade(&self,
             tracer: &RayTracer,
             scene: &Scene,
             ray: &Ray3f,
             record: &IntersectionRecord,
             _depth: u32) -> RGBSpectrum {
        let p = record.p();
        let n = record.normal();
        let v = -ray.dir();
        let mut out = RGBSpectrum::default();

        for light in scene.lights() {
            if tracer.is_shadowed(scene, light, record) {
                continue;
            }
            let l = light.direction_to(&p).normalize();
            let h = (l + v).normalize();

            let diffuse = self.diffuse_color * n.dot(&l).max(0.0);
            let specular = self.specular_color * n.dot(&h).max(0.0).powf(self.exponent);

            out += (diffuse + specular) * light.intensity() / light.distance_squared(&p);
        }

        out
    }
}
