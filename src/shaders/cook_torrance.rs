// Copyright @yucwang 2026

use crate::core::interaction::IntersectionRecord;
use crate::core::light::LightSource;
use crate::core::scene::Scene;
use crate::core::shader::Shade;
use crate::integrators::whitted::RayTracer;
use crate::math::constants::{Float, INV_PI};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use super::microfacet::{beckmann_d, fresnel_dielectric, geometric_attenuation};

/// Microfacet specular lobe over a diffuse base.
///
/// `roughness` is the Beckmann RMS slope. The Fresnel term always treats
/// the light as arriving from air (`eta = 1`) onto the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CookTorrance {
    pub diffuse_color: RGBSpectrum,
    pub specular_color: RGBSpectrum,
    pub roughness: Float,
    pub refractive_index: Float,
}

impl CookTorrance {
    pub fn new(diffuse_color: RGBSpectrum,
               specular_color: RGBSpectrum,
               roughness: Float,
               refractive_index: Float) -> Self {
        Self { diffuse_color, specular_color, roughness, refractive_index }
    }

    /// Specular reflectance factor `(F / pi) * G * D / ((N.V)(N.L))`.
    pub fn specular_factor(&self, n_dot_v: Float, n_dot_l: Float, n_dot_h: Float, v_dot_h: Float) -> Float {
        if n_dot_v <= 0.0 || n_dot_l <= 0.0 {
            return 0.0;
        }
        let f = fresnel_dielectric(n_dot_v, 1.0, self.refractive_index);
        let d = beckmann_d(n_dot_h, self.roughness);
        let g = geometric_attenuation(n_dot_h, n_dot_v, n_dot_l, v_dot_h);
        f * INV_PI * g * d / (n_dot_v * n_dot_l)
    }
}

impl Shade for CookTorrance {
    fn shade(&self,
             tracer: &RayTracer,
             scene: &Scene,
             ray: &Ray3f,
             record: &IntersectionRecord,
             _depth: u32) -> RGBSpectrum {
        let p = record.p();
        let n = record.normal();
        let v = -ray.dir();
        let n_dot_v = n.dot(&v);
        let mut out = RGBSpectrum::default();

        for light in scene.lights() {
            if tracer.is_shadowed(scene, light, record) {
                continue;
            }
            let l = light.direction_to(&p).normalize();
            let n_dot_l = n.dot(&l);
            if n_dot_l <= 0.0 {
                continue;
            }
            let h = (l + v).normalize();
            let spec = self.specular_factor(n_dot_v, n_dot_l, n.dot(&h), v.dot(&h));
            let spec = if spec.is_finite() { spec } else { 0.0 };

            let reflectance = self.specular_color * spec + self.diffuse_color;
            out += reflectance * light.intensity() * (n_dot_l / light.distance_squared(&p));
        }

        out
    }
}
