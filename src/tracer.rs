use geometry::{ray::Ray, Camera};
use indicatif::{ProgressBar, ProgressStyle};
use radiometry::color::Color;
use scene::Scene;

use crate::{directlighting, image::Canvas, settings::TraceSettings};

/// Read-only context of a render: the scene, the settings, and the camera derived from them.
/// Tracing never mutates it, so every pixel is an independent computation.
pub struct Renderer<'a> {
    scene: &'a Scene,
    settings: &'a TraceSettings,
    camera: Camera,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene, settings: &'a TraceSettings, resolution: (u32, u32)) -> Self {
        let camera = Camera::new(resolution, settings.fov).placed_at(settings.origin);
        Self {
            scene,
            settings,
            camera,
        }
    }

    /// Follows `ray` through its chain of mirror reflections and returns the clamped sum of the
    /// light gathered at every surface it hits.
    ///
    /// Each surface adds its direct lighting at full weight; the material's reflection coefficient
    /// is not applied. Before each bounce the distance travelled so far is checked against
    /// `ray_depth`: past it the walk ends and adds nothing more. A ray that escapes adds the
    /// background. Every hit lies more than `error_margin` away from its ray origin, so the
    /// distance grows on every bounce and the walk always ends.
    pub fn trace(&self, ray: Ray) -> Color {
        let TraceSettings {
            origin,
            error_margin,
            ray_depth,
            ..
        } = *self.settings;

        let mut ray = ray;
        let mut radiance = Color::black();
        let mut travelled = 0.0f32;
        while travelled <= ray_depth {
            let (hit, mtl) = match self.scene.intersect(&ray, error_margin) {
                None => {
                    radiance += self.scene.background();
                    break;
                }
                Some(hit_and_mtl) => hit_and_mtl,
            };
            radiance += directlighting::direct_lighting(self.scene, &hit, mtl, origin, error_margin);
            // Transparent surfaces reflect like the others; refraction is not traced.
            travelled += hit.ray_t;
            ray = Ray::new(hit.pos, ray.dir.mirror(hit.normal));
        }
        radiance.clamped()
    }

    /// Traces the primary ray of pixel `(x, y)` (`y = 0` is the bottom row) and applies gamma
    /// correction. Pixels outside the film get the background.
    pub fn render_pixel(&self, x: u32, y: u32) -> Color {
        let color = match self.camera.shoot_ray(x, y) {
            Some(ray) => self.trace(ray),
            None => self.scene.background(),
        };
        color.clamped().gamma_corrected(self.settings.gamma)
    }

    /// Renders every pixel of `canvas`, which should match the camera resolution.
    pub fn render(&self, canvas: &mut Canvas) {
        let (width, height) = canvas.resolution();
        if (width, height) != self.camera.resolution() {
            log::warn!(
                "Canvas is {}x{} but the camera film is {:?}",
                width,
                height,
                self.camera.resolution()
            );
        }
        let progress = ProgressBar::new(height as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{elapsed_precise} [{bar:40}] {pos}/{len} rows ({eta})")
                .progress_chars("=> "),
        );
        for y in (0..height).rev() {
            for x in 0..width {
                canvas.set_pixel(x, y, self.render_pixel(x, y));
            }
            progress.inc(1);
        }
        progress.finish_and_clear();
        log::info!("Rendered {}x{} pixels", width, height);
    }
}
