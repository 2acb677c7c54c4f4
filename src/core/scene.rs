// Copyright @yucwang 2026

use crate::core::bvh::{BVH, LEAF_THRESHOLD};
use crate::core::error::SceneError;
use crate::core::interaction::IntersectionRecord;
use crate::core::light::Light;
use crate::core::sensor::Sensor;
use crate::core::shape::Surface;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Geometry, lights and cameras ready to be traced. Read-only while
/// rendering, apart from cameras lent out to a renderer.
pub struct Scene {
    bvh: BVH,
    lights: Vec<Light>,
    sensors: Vec<Box<dyn Sensor>>,
    background: RGBSpectrum,
}

impl Scene {
    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<IntersectionRecord> {
        self.bvh.ray_intersection(ray)
    }

    pub fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        self.bvh.ray_intersection_t(ray)
    }

    pub fn surface(&self, record: &IntersectionRecord) -> &Surface {
        self.bvh.surface(record.surface_index())
    }

    pub fn surfaces(&self) -> &[Surface] {
        self.bvh.surfaces()
    }

    pub fn bvh(&self) -> &BVH {
        &self.bvh
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn background(&self) -> RGBSpectrum {
        self.background
    }

    pub fn sensors(&self) -> &Vec<Box<dyn Sensor>> {
        &self.sensors
    }

    pub fn camera(&self, camera_id: usize) -> Option<&dyn Sensor> {
        self.sensors.get(camera_id).map(|s| s.as_ref())
    }

    pub fn take_sensor(&mut self, camera_id: usize) -> Option<Box<dyn Sensor>> {
        if camera_id < self.sensors.len() {
            Some(self.sensors.remove(camera_id))
        } else {
            None
        }
    }

    pub fn insert_sensor(&mut self, camera_id: usize, sensor: Box<dyn Sensor>) {
        if camera_id <= self.sensors.len() {
            self.sensors.insert(camera_id, sensor);
        } else {
            self.sensors.push(sensor);
        }
    }
}

/// Collects scene contents; `build` constructs the BVH once everything is in.
pub struct SceneBuilder {
    surfaces: Vec<Surface>,
    lights: Vec<Light>,
    sensors: Vec<Box<dyn Sensor>>,
    background: RGBSpectrum,
    leaf_size: usize,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            lights: Vec::new(),
            sensors: Vec::new(),
            background: RGBSpectrum::default(),
            leaf_size: LEAF_THRESHOLD,
        }
    }

    pub fn add_surface(mut self, surface: impl Into<Surface>) -> Self {
        self.surfaces.push(surface.into());
        self
    }

    pub fn add_surfaces(mut self, surfaces: impl IntoIterator<Item = Surface>) -> Self {
        self.surfaces.extend(surfaces);
        self
    }

    pub fn add_light(mut self, light: impl Into<Light>) -> Self {
        self.lights.push(light.into());
        self
    }

    pub fn add_sensor(mut self, sensor: Box<dyn Sensor>) -> Self {
        self.sensors.push(sensor);
        self
    }

    pub fn background(mut self, background: RGBSpectrum) -> Self {
        self.background = background;
        self
    }

    pub fn leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    pub fn build(self) -> Result<Scene, SceneError> {
        let surface_count = self.surfaces.len();
        let bvh = BVH::with_max_leaf_size(self.surfaces, self.leaf_size)?;
        log::info!("Scene built: {} surfaces, {} lights, {} cameras, {} BVH nodes.",
                   surface_count, self.lights.len(), self.sensors.len(), bvh.node_count());

        Ok(Scene {
            bvh,
            lights: self.lights,
            sensors: self.sensors,
            background: self.background,
        })
    }
}
