// Copyright @yucwang 2021

pub mod bvh;
pub mod error;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod sensor;
pub mod scene;
pub mod shader;
pub mod shape;
