// Copyright @yucwang 2026

use crate::lights::directional::DirectionalLight;
use crate::lights::point::PointLight;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// Queries a shader needs from a light, all relative to a surface point.
pub trait LightSource: Send + Sync {
    fn intensity(&self) -> RGBSpectrum;
    /// Unnormalized direction from `p` towards the light.
    fn direction_to(&self, p: &Vector3f) -> Vector3f;
    /// Divisor applied to the intensity at `p`.
    fn distance_squared(&self, p: &Vector3f) -> Float;
    /// Parametric end of a unit-direction shadow ray from `p`.
    fn shadow_ray_end(&self, p: &Vector3f) -> Float;
}

pub enum Light {
    Point(PointLight),
    Directional(DirectionalLight),
}

impl LightSource for Light {
    fn intensity(&self) -> RGBSpectrum {
        match self {
            Light::Point(light) => light.intensity(),
            Light::Directional(light) => light.intensity(),
        }
    }

    fn direction_to(&self, p: &Vector3f) -> Vector3f {
        match self {
            Light::Point(light) => light.direction_to(p),
            Light::Directional(light) => light.direction_to(p),
        }
    }

    fn distance_squared(&self, p: &Vector3f) -> Float {
        match self {
            Light::Point(light) => light.distance_squared(p),
            Light::Directional(light) => light.distance_squared(p),
        }
    }

    fn shadow_ray_end(&self, p: &Vector3f) -> Float {
        match self {
            Light::Point(light) => light.shadow_ray_end(p),
            Light::Directional(light) => light.shadow_ray_end(p),
        }
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Light::Directional(light)
    }
}
