// Copyright @yucwang 2026

pub mod directional;
pub mod point;
