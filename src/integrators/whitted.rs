// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::light::Light;
use crate::core::interaction::IntersectionRecord;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::core::shader::{is_shadowed, Shade};
use crate::math::constants::{Float, Vector2f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// Counters collected while tracing.
#[derive(Debug, Default)]
pub struct TraceStats {
    primary_rays: AtomicU64,
    recursive_rays: AtomicU64,
    shadow_rays: AtomicU64,
    terminated_rays: AtomicU64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceStatsSnapshot {
    pub primary_rays: u64,
    pub recursive_rays: u64,
    pub shadow_rays: u64,
    pub terminated_rays: u64,
}

impl TraceStats {
    pub fn snapshot(&self) -> TraceStatsSnapshot {
        TraceStatsSnapshot {
            primary_rays: self.primary_rays.load(Ordering::Relaxed),
            recursive_rays: self.recursive_rays.load(Ordering::Relaxed),
            shadow_rays: self.shadow_rays.load(Ordering::Relaxed),
            terminated_rays: self.terminated_rays.load(Ordering::Relaxed),
        }
    }
}

impl fmt::Display for TraceStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} primary, {} recursive, {} shadow, {} cut at max depth",
               self.primary_rays, self.recursive_rays, self.shadow_rays, self.terminated_rays)
    }
}

/// Whitted-style recursive ray tracer.
///
/// Shaders call back into [`RayTracer::shade_ray`] for reflection and
/// refraction, so recursion alternates tracer, shader, tracer. Depth is the
/// only bound on it.
pub struct RayTracer {
    pub max_depth: u32,
    /// Rounded down to a square grid per pixel.
    pub samples_per_pixel: u32,
    stats: TraceStats,
}

impl Default for RayTracer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, 1)
    }
}

impl RayTracer {
    pub fn new(max_depth: u32, samples_per_pixel: u32) -> Self {
        Self { max_depth, samples_per_pixel, stats: TraceStats::default() }
    }

    pub fn stats(&self) -> &TraceStats {
        &self.stats
    }

    /// Radiance arriving along `ray`. Black once `depth` passes
    /// `max_depth`, the background color on a miss.
    pub fn shade_ray(&self, scene: &Scene, ray: &Ray3f, depth: u32) -> RGBSpectrum {
        if depth > self.max_depth {
            self.stats.terminated_rays.fetch_add(1, Ordering::Relaxed);
            return RGBSpectrum::default();
        }
        if depth == 0 {
            self.stats.primary_rays.fetch_add(1, Ordering::Relaxed);
        } else {
            self.stats.recursive_rays.fetch_add(1, Ordering::Relaxed);
        }

        match scene.ray_intersection(ray) {
            Some(record) => scene.surface(&record).shader().shade(self, scene, ray, &record, depth),
            None => scene.background(),
        }
    }

    pub fn is_shadowed(&self, scene: &Scene, light: &Light, record: &IntersectionRecord) -> bool {
        self.stats.shadow_rays.fetch_add(1, Ordering::Relaxed);
        is_shadowed(scene, light, record)
    }

    fn grid_size(&self) -> u32 {
        let n = (self.samples_per_pixel as f64).sqrt().floor() as u32;
        n.max(1)
    }
}

impl Integrator for RayTracer {
    fn trace_pixel(&self, scene: &Scene, sensor: &dyn Sensor, pixel: Vector2f) -> RGBSpectrum {
        let bitmap = sensor.bitmap();
        let width = bitmap.width().max(1) as Float;
        let height = bitmap.height().max(1) as Float;
        let n = self.grid_size();
        let step = 1.0 / n as Float;

        let mut color = RGBSpectrum::default();
        for j in 0..n {
            for i in 0..n {
                let u = (pixel.x + (i as Float + 0.5) * step) / width;
                let v = (pixel.y + (j as Float + 0.5) * step) / height;
                let ray = sensor.sample_ray(&Vector2f::new(u, v));
                color += self.shade_ray(scene, &ray, 0);
            }
        }

        color / (n * n) as Float
    }

    fn samples_per_pixel(&self) -> u32 {
        let n = self.grid_size();
        n * n
    }

    fn describe(&self) -> String {
        format!("RayTracer: max depth {}, {} samples per pixel", self.max_depth, self.samples_per_pixel())
    }

    fn summary(&self) -> Option<String> {
        Some(self.stats.snapshot().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SceneBuilder;
    use crate::core::shader::Shader;
    use crate::lights::point::PointLight;
    use crate::math::bitmap::Bitmap;
    use crate::math::constants::Vector3f;
    use crate::shaders::cook_torrance::CookTorrance;
    use crate::shaders::glass::Glass;
    use crate::shaders::lambertian::Lambertian;
    use crate::shaders::mirror::Mirror;
    use crate::shaders::phong::Phong;
    use crate::shapes::sphere::Sphere;
    use crate::shapes::triangle_mesh::TriangleMesh;
    use std::sync::Arc;

    /// A single large triangle in the plane `z = z` that covers the origin.
    fn wall(z: Float, shader: Arc<Shader>) -> Vec<crate::core::shape::Surface> {
        let mesh = Arc::new(TriangleMesh::new(vec![
            Vector3f::new(-100.0, -100.0, z),
            Vector3f::new(100.0, -100.0, z),
            Vector3f::new(0.0, 100.0, z),
        ], None).unwrap());
        TriangleMesh::triangles(&mesh, &[[0, 1, 2]], shader).unwrap()
    }

    #[test]
    fn test_miss_returns_background() {
        let shader = Arc::new(Shader::default());
        let scene = SceneBuilder::new()
            .add_surface(Sphere::new(Vector3f::new(0.0, 0.0, -5.0), 1.0, shader).unwrap())
            .background(RGBSpectrum::new(0.1, 0.2, 0.3))
            .build()
            .unwrap();
        let tracer = RayTracer::default();

        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), None, None);
        assert_eq!(tracer.shade_ray(&scene, &ray, 0), RGBSpectrum::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_refuses_past_max_depth() {
        let shader = Arc::new(Shader::default());
        let scene = SceneBuilder::new()
            .add_surface(Sphere::new(Vector3f::new(0.0, 0.0, -5.0), 1.0, shader).unwrap())
            .background(RGBSpectrum::splat(1.0))
            .build()
            .unwrap();
        let tracer = RayTracer::new(2, 1);

        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), None, None);
        assert_eq!(tracer.shade_ray(&scene, &ray, 2), RGBSpectrum::splat(1.0));
        assert!(tracer.shade_ray(&scene, &ray, 3).is_black());
        assert_eq!(tracer.stats().snapshot().terminated_rays, 1);
    }

    #[test]
    fn test_parallel_mirrors_stop_at_max_depth() {
        let mirror = Arc::new(Shader::from(Mirror::new(RGBSpectrum::splat(1.0))));
        let scene = SceneBuilder::new()
            .add_surfaces(wall(1.0, mirror.clone()))
            .add_surfaces(wall(-1.0, mirror))
            .background(RGBSpectrum::splat(1.0))
            .build()
            .unwrap();

        for max_depth in [0u32, 1, 4, 8].iter() {
            let tracer = RayTracer::new(*max_depth, 1);
            let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0), None, None);
            let color = tracer.shade_ray(&scene, &ray, 0);

            let stats = tracer.stats().snapshot();
            assert!(color.is_black());
            assert_eq!(stats.primary_rays, 1);
            assert_eq!(stats.recursive_rays, *max_depth as u64);
            assert_eq!(stats.terminated_rays, 1);
        }
    }

    #[test]
    fn test_lambertian_facing_point_light() {
        let shader = Arc::new(Shader::from(Lambertian::new(RGBSpectrum::new(0.5, 0.5, 0.5))));
        let scene = SceneBuilder::new()
            .add_surfaces(wall(-1.0, shader))
            .add_light(PointLight::new(Vector3f::new(0.0, 0.0, 1.0), RGBSpectrum::splat(4.0)))
            .build()
            .unwrap();
        let tracer = RayTracer::default();

        // Hit at (0, 0, -1), light 2 units straight up: 0.5 * 4 * 1 / 4.
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let color = tracer.shade_ray(&scene, &ray, 0);
        assert!((color[0] - 0.5).abs() < 1e-3);
        assert_eq!(tracer.stats().snapshot().shadow_rays, 1);
    }

    #[test]
    fn test_phong_facing_point_light() {
        let phong = Phong::new(RGBSpectrum::splat(0.2), RGBSpectrum::splat(0.3), 20.0);
        let scene = SceneBuilder::new()
            .add_surfaces(wall(-1.0, Arc::new(Shader::from(phong))))
            .add_light(PointLight::new(Vector3f::new(0.0, 0.0, 1.0), RGBSpectrum::splat(4.0)))
            .build()
            .unwrap();
        let tracer = RayTracer::default();

        // V = L = N, so N.H = 1 and the lobe peaks: (0.2 + 0.3) * 4 / 4.
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let color = tracer.shade_ray(&scene, &ray, 0);
        assert!((color[0] - 0.5).abs() < 1e-3);
        assert!((color[2] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_cook_torrance_facing_point_light() {
        let ct = CookTorrance::new(RGBSpectrum::splat(0.2), RGBSpectrum::splat(1.0), 0.5, 1.5);
        let shader = Arc::new(Shader::from(ct));
        let lit = SceneBuilder::new()
            .add_surfaces(wall(-1.0, shader.clone()))
            .add_light(PointLight::new(Vector3f::new(0.0, 0.0, 1.0), RGBSpectrum::splat(4.0)))
            .build()
            .unwrap();
        let tracer = RayTracer::default();

        // F = 0.04, D = 1 / m^2 = 4, G = 1; I / r^2 = 1 and N.L = 1.
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let expected = 0.04 * crate::math::constants::INV_PI * 4.0 + 0.2;
        let color = tracer.shade_ray(&lit, &ray, 0);
        assert!((color[0] - expected).abs() < 1e-3);

        // Light below the wall contributes nothing.
        let behind = SceneBuilder::new()
            .add_surfaces(wall(-1.0, shader))
            .add_light(PointLight::new(Vector3f::new(0.0, 0.0, -3.0), RGBSpectrum::splat(4.0)))
            .build()
            .unwrap();
        assert_eq!(tracer.shade_ray(&behind, &ray, 0), RGBSpectrum::default());
    }

    #[test]
    fn test_occluder_casts_shadow() {
        let shader = Arc::new(Shader::default());
        let scene = SceneBuilder::new()
            .add_surfaces(wall(-1.0, shader.clone()))
            .add_surface(Sphere::new(Vector3f::new(0.3, 0.1, 1.0), 0.5, shader).unwrap())
            .add_light(PointLight::new(Vector3f::new(0.3, 0.1, 3.0), RGBSpectrum::splat(4.0)))
            .build()
            .unwrap();
        let tracer = RayTracer::default();

        let ray = Ray3f::new(Vector3f::new(0.3, 0.1, 0.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        assert!(tracer.shade_ray(&scene, &ray, 0).is_black());
    }

    #[test]
    fn test_glass_sphere_passes_background_through() {
        let glass = Arc::new(Shader::from(Glass::new(1.5)));
        let scene = SceneBuilder::new()
            .add_surface(Sphere::new(Vector3f::new(0.0, 0.0, -5.0), 1.0, glass).unwrap())
            .background(RGBSpectrum::splat(1.0))
            .build()
            .unwrap();
        let tracer = RayTracer::default();

        // Every path eventually escapes to the uniform background, so the
        // Fresnel weights must add back up to one.
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let color = tracer.shade_ray(&scene, &ray, 0);
        assert!((color[0] - 1.0).abs() < 1e-3);
        assert!(tracer.stats().snapshot().recursive_rays > 2);
    }

    struct FixedSensor {
        bitmap: Bitmap,
    }

    impl Sensor for FixedSensor {
        fn sample_ray(&self, u: &Vector2f) -> Ray3f {
            Ray3f::new(Vector3f::new(u.x, u.y, 0.0), Vector3f::new(0.0, 0.0, -1.0), None, None)
        }

        fn bitmap(&self) -> &Bitmap {
            &self.bitmap
        }

        fn bitmap_mut(&mut self) -> &mut Bitmap {
            &mut self.bitmap
        }
    }

    #[test]
    fn test_trace_pixel_grid() {
        let shader = Arc::new(Shader::default());
        let scene = SceneBuilder::new()
            .add_surface(Sphere::new(Vector3f::new(10.0, 10.0, -50.0), 1.0, shader).unwrap())
            .background(RGBSpectrum::splat(0.25))
            .build()
            .unwrap();
        let sensor = FixedSensor { bitmap: Bitmap::new(2, 2) };

        let tracer = RayTracer::new(DEFAULT_MAX_DEPTH, 5);
        assert_eq!(tracer.samples_per_pixel(), 4);
        let color = tracer.trace_pixel(&scene, &sensor, Vector2f::new(1.0, 0.0));
        assert!((color[1] - 0.25).abs() < 1e-6);
        assert_eq!(tracer.stats().snapshot().primary_rays, 4);
    }
}
