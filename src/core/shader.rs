// Copyright @yucwang 2026

use crate::core::interaction::IntersectionRecord;
use crate::core::light::{Light, LightSource};
use crate::core::scene::Scene;
use crate::integrators::whitted::RayTracer;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::shaders::cook_torrance::CookTorrance;
use crate::shaders::glass::Glass;
use crate::shaders::lambertian::Lambertian;
use crate::shaders::mirror::Mirror;
use crate::shaders::phong::Phong;

/// Radiance leaving `record` back along `ray`.
///
/// Shaders that spawn secondary rays hand them to `tracer.shade_ray` with
/// `depth + 1`; the tracer decides when to stop.
pub trait Shade: Send + Sync {
    fn shade(&self,
             tracer: &RayTracer,
             scene: &Scene,
             ray: &Ray3f,
             record: &IntersectionRecord,
             depth: u32) -> RGBSpectrum;
}

/// Material parameters are fixed once the scene is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Shader {
    Lambertian(Lambertian),
    Phong(Phong),
    CookTorrance(CookTorrance),
    Glass(Glass),
    Mirror(Mirror),
}

impl Default for Shader {
    fn default() -> Self {
        Shader::Lambertian(Lambertian::default())
    }
}

impl Shade for Shader {
    fn shade(&self,
             tracer: &RayTracer,
             scene: &Scene,
             ray: &Ray3f,
             record: &IntersectionRecord,
             depth: u32) -> RGBSpectrum {
        match self {
            Shader::Lambertian(s) => s.shade(tracer, scene, ray, record, depth),
            Shader::Phong(s) => s.shade(tracer, scene, ray, record, depth),
            Shader::CookTorrance(s) => s.shade(tracer, scene, ray, record, depth),
            Shader::Glass(s) => s.shade(tracer, scene, ray, record, depth),
            Shader::Mirror(s) => s.shade(tracer, scene, ray, record, depth),
        }
    }
}

impl From<Lambertian> for Shader {
    fn from(s: Lambertian) -> Self {
        Shader::Lambertian(s)
    }
}

impl From<Phong> for Shader {
    fn from(s: Phong) -> Self {
        Shader::Phong(s)
    }
}

impl From<CookTorrance> for Shader {
    fn from(s: CookTorrance) -> Self {
        Shader::CookTorrance(s)
    }
}

impl From<Glass> for Shader {
    fn from(s: Glass) -> Self {
        Shader::Glass(s)
    }
}

impl From<Mirror> for Shader {
    fn from(s: Mirror) -> Self {
        Shader::Mirror(s)
    }
}

/// Shadow ray from the hit point towards `light`, stopping just short of it.
pub fn shadow_ray(light: &Light, record: &IntersectionRecord) -> Ray3f {
    let p = record.p();
    let mut ray = Ray3f::new(p, light.direction_to(&p), None, None);
    ray.offset_segment(light.shadow_ray_end(&p));
    ray
}

/// True if any surface blocks the segment between the hit point and `light`.
pub fn is_shadowed(scene: &Scene, light: &Light, record: &IntersectionRecord) -> bool {
    scene.ray_intersection_t(&shadow_ray(light, record))
}
