// Copyright @yucwang 2026

//! Built-in scenes assembled in code.

use crate::core::error::SceneError;
use crate::core::scene::{Scene, SceneBuilder};
use crate::core::shader::Shader;
use crate::core::shape::Surface;
use crate::lights::directional::DirectionalLight;
use crate::lights::point::PointLight;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::sensors::orthographic::OrthographicCamera;
use crate::sensors::perspective::PerspectiveCamera;
use crate::shaders::cook_torrance::CookTorrance;
use crate::shaders::glass::Glass;
use crate::shaders::lambertian::Lambertian;
use crate::shaders::mirror::Mirror;
use crate::shaders::phong::Phong;
use crate::shapes::sphere::Sphere;
use crate::shapes::triangle_mesh::TriangleMesh;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoScene {
    /// One sphere per opaque shader on a ground plane.
    Spheres,
    /// A glass sphere in front of colored spheres.
    Glass,
    /// Smooth and flat shaded triangle meshes.
    Mesh,
    /// A sphere between two facing mirrors.
    Mirrors,
}

impl DemoScene {
    pub const ALL: [DemoScene; 4] = [DemoScene::Spheres, DemoScene::Glass, DemoScene::Mesh, DemoScene::Mirrors];

    pub fn name(&self) -> &'static str {
        match self {
            DemoScene::Spheres => "spheres",
            DemoScene::Glass => "glass",
            DemoScene::Mesh => "mesh",
            DemoScene::Mirrors => "mirrors",
        }
    }
}

impl fmt::Display for DemoScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoScene {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoScene::ALL
            .iter()
            .find(|scene| scene.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown scene `{}`", s))
    }
}

/// Camera 0 is perspective, camera 1 orthographic; both look at the origin.
pub fn build_demo(kind: DemoScene, width: usize, height: usize) -> Result<Scene, SceneError> {
    log::info!("Building demo scene `{}` at {}x{}.", kind, width, height);

    let builder = match kind {
        DemoScene::Spheres => spheres()?,
        DemoScene::Glass => glass()?,
        DemoScene::Mesh => mesh()?,
        DemoScene::Mirrors => mirrors()?,
    };

    let eye = match kind {
        DemoScene::Mirrors => Vector3f::new(0.0, 2.0, 7.0),
        _ => Vector3f::new(0.0, 1.5, 6.0),
    };
    let target = Vector3f::new(0.0, 0.5, 0.0);
    let up = Vector3f::new(0.0, 1.0, 0.0);

    builder
        .add_sensor(Box::new(PerspectiveCamera::with_resolution(eye, target, up, (40.0 as Float).to_radians(), width, height)))
        .add_sensor(Box::new(OrthographicCamera::new(eye, target, up, 4.0, width, height)))
        .build()
}

fn shader(s: impl Into<Shader>) -> Arc<Shader> {
    Arc::new(s.into())
}

/// Two triangles over the corners, given in winding order.
fn quad(corners: [Vector3f; 4], shader: Arc<Shader>) -> Result<Vec<Surface>, SceneError> {
    let mesh = Arc::new(TriangleMesh::new(corners.to_vec(), None)?);
    TriangleMesh::triangles(&mesh, &[[0, 1, 2], [0, 2, 3]], shader)
}

fn ground(size: Float, shader: Arc<Shader>) -> Result<Vec<Surface>, SceneError> {
    quad([Vector3f::new(-size, 0.0, size),
          Vector3f::new(size, 0.0, size),
          Vector3f::new(size, 0.0, -size),
          Vector3f::new(-size, 0.0, -size)], shader)
}

fn lights(builder: SceneBuilder) -> SceneBuilder {
    builder
        .add_light(PointLight::new(Vector3f::new(4.0, 6.0, 4.0), RGBSpectrum::splat(60.0)))
        .add_light(DirectionalLight::new(Vector3f::new(-0.3, -1.0, -0.5), RGBSpectrum::splat(0.3)))
}

fn spheres() -> Result<SceneBuilder, SceneError> {
    let floor = shader(Lambertian::new(RGBSpectrum::new(0.6, 0.6, 0.6)));
    let matte = shader(Lambertian::new(RGBSpectrum::new(0.8, 0.2, 0.2)));
    let plastic = shader(Phong::new(RGBSpectrum::new(0.2, 0.6, 0.2),
                                    RGBSpectrum::splat(0.5), 50.0));
    let metal = shader(CookTorrance::new(RGBSpectrum::new(0.1, 0.1, 0.3),
                                         RGBSpectrum::splat(1.0), 0.25, 1.5));

    let builder = SceneBuilder::new()
        .add_surfaces(ground(10.0, floor)?)
        .add_surface(Sphere::new(Vector3f::new(-1.6, 0.7, 0.0), 0.7, matte)?)
        .add_surface(Sphere::new(Vector3f::new(0.0, 0.7, 0.0), 0.7, plastic)?)
        .add_surface(Sphere::new(Vector3f::new(1.6, 0.7, 0.0), 0.7, metal)?)
        .background(RGBSpectrum::new(0.05, 0.05, 0.1));
    Ok(lights(builder))
}

fn glass() -> Result<SceneBuilder, SceneError> {
    let floor = shader(Lambertian::new(RGBSpectrum::new(0.7, 0.7, 0.7)));
    let glass = shader(Glass::new(1.5));

    let mut builder = SceneBuilder::new()
        .add_surfaces(ground(10.0, floor)?)
        .add_surface(Sphere::new(Vector3f::new(0.0, 0.8, 1.0), 0.8, glass)?)
        .background(RGBSpectrum::new(0.4, 0.5, 0.7));

    let colors = [RGBSpectrum::new(0.9, 0.2, 0.2), RGBSpectrum::new(0.2, 0.9, 0.2), RGBSpectrum::new(0.2, 0.2, 0.9)];
    for (i, color) in colors.iter().enumerate() {
        let x = (i as Float - 1.0) * 1.5;
        let s = shader(Phong::new(*color, RGBSpectrum::splat(0.3), 30.0));
        builder = builder.add_surface(Sphere::new(Vector3f::new(x, 0.5, -2.0), 0.5, s)?);
    }
    Ok(lights(builder))
}

fn mesh() -> Result<SceneBuilder, SceneError> {
    let floor = shader(Lambertian::new(RGBSpectrum::new(0.6, 0.6, 0.6)));
    let smooth = shader(Phong::new(RGBSpectrum::new(0.8, 0.5, 0.1), RGBSpectrum::splat(0.4), 40.0));
    let flat = shader(Lambertian::new(RGBSpectrum::new(0.2, 0.5, 0.8)));

    // Octahedron with per-vertex normals pointing away from its center.
    let center = Vector3f::new(-1.0, 1.0, 0.0);
    let offsets = [
        Vector3f::new(1.0, 0.0, 0.0), Vector3f::new(-1.0, 0.0, 0.0),
        Vector3f::new(0.0, 1.0, 0.0), Vector3f::new(0.0, -1.0, 0.0),
        Vector3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0),
    ];
    let positions = offsets.iter().map(|o| center + *o * 0.9).collect();
    let normals = offsets.to_vec();
    let octahedron = Arc::new(TriangleMesh::new(positions, Some(normals))?);
    let faces = [[0, 2, 4], [4, 2, 1], [1, 2, 5], [5, 2, 0],
                 [4, 3, 0], [1, 3, 4], [5, 3, 1], [0, 3, 5]];

    // Flat shaded tetrahedron resting on the floor.
    let tetrahedron = Arc::new(TriangleMesh::new(vec![
        Vector3f::new(0.6, 0.01, 0.8),
        Vector3f::new(2.2, 0.01, 0.8),
        Vector3f::new(1.4, 0.01, -0.6),
        Vector3f::new(1.4, 1.4, 0.3),
    ], None)?);

    let builder = SceneBuilder::new()
        .add_surfaces(ground(10.0, floor)?)
        .add_surfaces(TriangleMesh::triangles(&octahedron, &faces, smooth)?)
        .add_surfaces(TriangleMesh::triangles(&tetrahedron, &[[0, 1, 3], [1, 2, 3], [2, 0, 3], [0, 2, 1]], flat)?)
        .background(RGBSpectrum::new(0.05, 0.05, 0.1));
    Ok(lights(builder))
}

fn mirrors() -> Result<SceneBuilder, SceneError> {
    let floor = shader(Lambertian::new(RGBSpectrum::new(0.6, 0.6, 0.6)));
    let mirror = shader(Mirror::new(RGBSpectrum::splat(0.9)));
    let ball = shader(Phong::new(RGBSpectrum::new(0.8, 0.3, 0.1), RGBSpectrum::splat(0.5), 60.0));

    let builder = SceneBuilder::new()
        .add_surfaces(ground(10.0, floor)?)
        .add_surfaces(quad([Vector3f::new(-2.5, 0.0, -3.0),
                            Vector3f::new(-2.5, 0.0, 3.0),
                            Vector3f::new(-2.5, 3.0, 3.0),
                            Vector3f::new(-2.5, 3.0, -3.0)], mirror.clone())?)
        .add_surfaces(quad([Vector3f::new(2.5, 0.0, 3.0),
                            Vector3f::new(2.5, 0.0, -3.0),
                            Vector3f::new(2.5, 3.0, -3.0),
                            Vector3f::new(2.5, 3.0, 3.0)], mirror)?)
        .add_surface(Sphere::new(Vector3f::new(0.0, 0.8, 0.0), 0.8, ball)?)
        .background(RGBSpectrum::new(0.05, 0.05, 0.1));
    Ok(lights(builder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrators::whitted::RayTracer;
    use crate::math::ray::Ray3f;

    #[test]
    fn test_scene_names_round_trip() {
        for kind in DemoScene::ALL.iter() {
            assert_eq!(kind.name().parse::<DemoScene>(), Ok(*kind));
        }
        assert!("teapot".parse::<DemoScene>().is_err());
    }

    #[test]
    fn test_all_demos_build() {
        for kind in DemoScene::ALL.iter() {
            let scene = build_demo(*kind, 16, 12).unwrap();
            assert!(scene.surfaces().len() >= 3);
            assert_eq!(scene.sensors().len(), 2);
            assert_eq!(scene.lights().len(), 2);
        }
    }

    #[test]
    fn test_mesh_demo_keeps_every_face() {
        let scene = build_demo(DemoScene::Mesh, 8, 8).unwrap();
        // Ground quad, octahedron and tetrahedron.
        assert_eq!(scene.surfaces().len(), 2 + 8 + 4);
    }

    #[test]
    fn test_lit_floor_is_bright() {
        let scene = build_demo(DemoScene::Spheres, 8, 8).unwrap();
        let tracer = RayTracer::default();
        let ray = Ray3f::new(Vector3f::new(3.0, 5.0, 3.0), Vector3f::new(0.0, -1.0, 0.0), None, None);
        let color = tracer.shade_ray(&scene, &ray, 0);
        assert!(color.max_component() > 0.1);
        assert!(color.is_finite());
    }
}
