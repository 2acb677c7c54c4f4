// Copyright @yucwang 2021

use crate::core::scene::Scene;
use crate::math::bitmap::Bitmap;

/// Turns one of the scene's cameras into an image. The camera is lent out
/// for the duration of the call and put back afterwards.
pub trait Renderer {
    fn render(&self, scene: &mut Scene) -> Bitmap;
}
