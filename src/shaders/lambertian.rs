// Copyright @yucwang 2026

use crate::core::interaction::IntersectionRecord;
use crate::core::light::LightSource;
use crate::core::scene::Scene;
use crate::core::shader::Shade;
use crate::integrators::whitted::RayTracer;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Ideal diffuse reflector.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambertian {
    pub diffuse_color: RGBSpectrum,
}

impl Lambertian {
    pub fn new(diffuse_color: RGBSpectrum) -> Self {
        Self { diffuse_color }
    }
}

impl Default for Lambertian {
    fn default() -> Self {
        Self::new(RGBSpectrum::splat(1.0))
    }
}

impl Shade for Lambertian {
    fn shade(&self,
             tracer: &RayTracer,
             scene: &Scene,
             _ray: &Ray3f,
             record: &IntersectionRecord,
             _depth: u32) -> RGBSpectrum {
        let p = record.p();
        let n = record.normal();
        let mut out = RGBSpectrum::default();

        for light in scene.lights() {
            if tracer.is_shadowed(scene, light, record) {
                continue;
            }
            let l = light.direction_to(&p).normalize();
            let n_dot_l = n.dot(&l).max(0.0);
            out += self.diffuse_color * light.intensity() * (n_dot_l / light.distance_squared(&p));
        }

        out
    }
}
