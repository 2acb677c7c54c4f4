// Copyright @yucwang 2026

use crate::core::interaction::IntersectionRecord;
use crate::core::scene::Scene;
use crate::core::shader::Shade;
use crate::integrators::whitted::RayTracer;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use super::microfacet::{fresnel_dielectric, reflect, refract};

/// Clear dielectric: reflection and refraction split by Fresnel.
#[derive(Debug, Clone, PartialEq)]
pub struct Glass {
    pub refractive_index: Float,
}

/// How a ray arriving at a dielectric boundary splits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassSplit {
    pub reflected: Vector3f,
    /// `None` on total internal reflection.
    pub refracted: Option<Vector3f>,
    /// Fraction of radiance carried by the reflected ray.
    pub reflectance: Float,
}

impl Glass {
    pub fn new(refractive_index: Float) -> Self {
        Self { refractive_index }
    }

    /// Split for a ray travelling along `dir` that hits a surface with
    /// outward normal `normal`.
    pub fn split(&self, dir: &Vector3f, normal: &Vector3f) -> GlassSplit {
        let v = -dir;
        let (n, n1, n2) = if v.dot(normal) < 0.0 {
            (-normal, self.refractive_index, 1.0)
        } else {
            (*normal, 1.0, self.refractive_index)
        };

        let cos_i = v.dot(&n).max(-1.0).min(1.0);
        let reflected = reflect(&v, &n);

        let total_internal = n1 > n2 && cos_i.acos() > (n2 / n1).asin();
        if total_internal {
            return GlassSplit { reflected, refracted: None, reflectance: 1.0 };
        }

        match refract(&v, &n, n1 / n2) {
            Some(refracted) => GlassSplit {
                reflected,
                refracted: Some(refracted),
                reflectance: fresnel_dielectric(cos_i, n1, n2),
            },
            None => GlassSplit { reflected, refracted: None, reflectance: 1.0 },
        }
    }
}

impl Shade for Glass {
    fn shade(&self,
             tracer: &RayTracer,
             scene: &Scene,
             ray: &Ray3f,
             record: &IntersectionRecord,
             depth: u32) -> RGBSpectrum {
        let split = self.split(&ray.dir(), &record.normal());
        let p = record.p();

        let reflected_ray = Ray3f::offset_from(p, split.reflected);
        let mut out = tracer.shade_ray(scene, &reflected_ray, depth + 1) * split.reflectance;

        if let Some(dir) = split.refracted {
            let refracted_ray = Ray3f::offset_from(p, dir);
            out += tracer.shade_ray(scene, &refracted_ray, depth + 1) * (1.0 - split.reflectance);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_incidence_split() {
        let glass = Glass::new(1.5);
        let split = glass.split(&Vector3f::new(0.0, 0.0, -1.0), &Vector3f::new(0.0, 0.0, 1.0));

        assert!((split.reflectance - 0.04).abs() < 1e-5);
        let t = split.refracted.unwrap();
        assert!((t - Vector3f::new(0.0, 0.0, -1.0)).norm() < 1e-5);
        assert!((split.reflected - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn test_entering_obeys_snell() {
        let glass = Glass::new(1.5);
        let n = Vector3f::new(0.0, 1.0, 0.0);
        for i in 1..9 {
            let theta = (i as Float * 10.0).to_radians();
            let dir = Vector3f::new(theta.sin(), -theta.cos(), 0.0);
            let split = glass.split(&dir, &n);

            let t = split.refracted.unwrap();
            assert!((t.norm() - 1.0).abs() < 1e-4);
            assert!((t.x - theta.sin() / 1.5).abs() < 1e-4);
            assert!(split.reflectance > 0.0 && split.reflectance < 1.0);
            assert!(split.reflected.y > 0.0);
        }
    }

    #[test]
    fn test_exit_flips_normal_and_indices() {
        let glass = Glass::new(1.5);
        let n = Vector3f::new(0.0, 0.0, 1.0);
        // Inside the medium travelling out through the surface.
        let theta = (20.0 as Float).to_radians();
        let dir = Vector3f::new(theta.sin(), 0.0, theta.cos());
        let split = glass.split(&dir, &n);

        let t = split.refracted.unwrap();
        assert!(t.z > 0.0);
        assert!((t.x - 1.5 * theta.sin()).abs() < 1e-5);
        // The reflection stays inside.
        assert!(split.reflected.z < 0.0);
    }

    #[test]
    fn test_total_internal_reflection() {
        let glass = Glass::new(1.5);
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let theta = (60.0 as Float).to_radians();
        let dir = Vector3f::new(theta.sin(), 0.0, theta.cos());
        let split = glass.split(&dir, &n);

        assert!(split.refracted.is_none());
        assert_eq!(split.reflectance, 1.0);
        assert!((split.reflected - Vector3f::new(theta.sin(), 0.0, -theta.cos())).norm() < 1e-5);
    }
}
