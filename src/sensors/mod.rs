// Copyright @yucwang 2026

pub mod orthographic;
pub mod perspective;
