// Copyright @yucwang 2021

use crate::core::integrator::Integrator;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

pub use super::renderer::Renderer;

pub const BLOCK_SIZE: usize = 64;

/// Renders one camera block by block on the calling thread.
pub struct SimpleRenderer {
    integrator: Box<dyn Integrator>,
    camera_id: usize,
    show_progress: bool,
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &mut Scene) -> Bitmap {
        let mut sensor = match scene.take_sensor(self.camera_id) {
            Some(sensor) => sensor,
            None => {
                log::warn!("Camera {} not found, nothing rendered.", self.camera_id);
                return Bitmap::new(0, 0);
            }
        };

        let (width, height) = {
            let bmp = sensor.bitmap();
            (bmp.width(), bmp.height())
        };
        if width == 0 || height == 0 {
            scene.insert_sensor(self.camera_id, sensor);
            return Bitmap::new(0, 0);
        }

        let blocks_x = (width + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let blocks_y = (height + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let total_blocks = blocks_x * blocks_y;

        log::info!("Rendering {} with {}: {}x{}, {} blocks.",
                   sensor.describe(), self.integrator.describe(), width, height, total_blocks);

        let progress = if self.show_progress {
            ProgressBar::new(total_blocks as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let start = Instant::now();
        let mut output = Bitmap::new(width, height);
        {
            let scene_ref: &Scene = scene;
            let sensor_ref: &dyn Sensor = sensor.as_ref();
            for block_index in 0..total_blocks {
                let bx = block_index % blocks_x;
                let by = block_index / blocks_x;
                let x0 = bx * BLOCK_SIZE;
                let y0 = by * BLOCK_SIZE;
                let x1 = (x0 + BLOCK_SIZE).min(width);
                let y1 = (y0 + BLOCK_SIZE).min(height);

                for y in y0..y1 {
                    for x in x0..x1 {
                        let pixel = Vector2f::new(x as Float, y as Float);
                        let rgb = self.integrator.trace_pixel(scene_ref, sensor_ref, pixel);
                        output[(x, y)] = rgb.to_vector();
                    }
                }
                progress.inc(1);
            }
        }
        progress.finish_and_clear();
        log::info!("Rendered in {:.2?}.", start.elapsed());
        if let Some(summary) = self.integrator.summary() {
            log::info!("Rays traced: {}.", summary);
        }

        let bitmap = sensor.bitmap_mut();
        for y in 0..height {
            for x in 0..width {
                bitmap[(x, y)] = output[(x, y)];
            }
        }
        scene.insert_sensor(self.camera_id, sensor);
        output
    }
}

impl SimpleRenderer {
    pub fn new(integrator: Box<dyn Integrator>, camera_id: usize) -> Self {
        Self {
            integrator,
            camera_id,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SceneBuilder;
    use crate::core::shader::Shader;
    use crate::integrators::whitted::RayTracer;
    use crate::math::constants::Vector3f;
    use crate::math::spectrum::RGBSpectrum;
    use crate::sensors::orthographic::OrthographicCamera;
    use crate::shapes::sphere::Sphere;
    use std::sync::Arc;

    #[test]
    fn test_render_fills_sensor_bitmap() {
        let shader = Arc::new(Shader::default());
        let mut scene = SceneBuilder::new()
            .add_surface(Sphere::new(Vector3f::new(0.0, 0.0, -5.0), 0.5, shader).unwrap())
            .add_sensor(Box::new(OrthographicCamera::new(Vector3f::zeros(),
                                                         Vector3f::new(0.0, 0.0, -1.0),
                                                         Vector3f::new(0.0, 1.0, 0.0),
                                                         4.0, 70, 66)))
            .background(RGBSpectrum::splat(0.5))
            .build()
            .unwrap();

        let renderer = SimpleRenderer::new(Box::new(RayTracer::default()), 0).with_progress(false);
        let image = renderer.render(&mut scene);

        assert_eq!(image.width(), 70);
        assert_eq!(image.height(), 66);
        // Corners see the background, the middle sees the unlit sphere.
        assert_eq!(image[(0, 0)], Vector3f::new(0.5, 0.5, 0.5));
        assert_eq!(image[(69, 65)], Vector3f::new(0.5, 0.5, 0.5));
        assert_eq!(image[(35, 33)], Vector3f::zeros());

        let sensor = scene.camera(0).unwrap();
        assert_eq!(sensor.bitmap()[(35, 33)], Vector3f::zeros());
        assert_eq!(sensor.bitmap()[(0, 0)], Vector3f::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_missing_camera() {
        let shader = Arc::new(Shader::default());
        let mut scene = SceneBuilder::new()
            .add_surface(Sphere::new(Vector3f::zeros(), 1.0, shader).unwrap())
            .build()
            .unwrap();
        let renderer = SimpleRenderer::new(Box::new(RayTracer::default()), 3).with_progress(false);
        let image = renderer.render(&mut scene);
        assert_eq!(image.width(), 0);
    }
}
