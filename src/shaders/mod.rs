// Copyright @yucwang 2026

pub mod cook_torrance;
pub mod glass;
pub mod lambertian;
pub mod microfacet;
pub mod mirror;
pub mod phong;
