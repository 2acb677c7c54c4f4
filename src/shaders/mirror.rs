// Copyright @yucwang 2026

use crate::core::interaction::IntersectionRecord;
use crate::core::scene::Scene;
use crate::core::shader::Shade;
use crate::integrators::whitted::RayTracer;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use super::microfacet::reflect;

/// Perfect specular reflector.
#[derive(Debug, Clone, PartialEq)]
pub struct Mirror {
    pub reflectance: RGBSpectrum,
}

impl Mirror {
    pub fn new(reflectance: RGBSpectrum) -> Self {
        Self { reflectance }
    }
}

impl Shade for Mirror {
    fn shade(&self,
             tracer: &RayTracer,
             scene: &Scene,
             ray: &Ray3f,
             record: &IntersectionRecord,
             depth: u32) -> RGBSpectrum {
        let v = -ray.dir();
        let mut n = record.normal();
        if v.dot(&n) < 0.0 {
            n = -n;
        }
        let reflected = Ray3f::offset_from(record.p(), reflect(&v, &n));
        self.reflectance * tracer.shade_ray(scene, &reflected, depth + 1)
    }
}
