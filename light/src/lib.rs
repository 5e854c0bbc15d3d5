use math::hcm;

/// Light categories. Spotlights are shaded exactly like point lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Point,
    Spotlight,
}

/// A light emitting from a single position, with a scalar brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: hcm::Point3,
    pub kind: LightKind,
    pub brightness: f32,
}

impl Light {
    pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

    /// Creates a light with the given position and kind, at the default brightness.
    pub fn new(position: hcm::Point3, kind: LightKind) -> Self {
        Self {
            position,
            kind,
            brightness: Self::DEFAULT_BRIGHTNESS,
        }
    }

    /// Creates a point light with the given position and brightness.
    pub fn point(position: hcm::Point3, brightness: f32) -> Self {
        Self::new(position, LightKind::Point).with_brightness(brightness)
    }

    pub fn with_brightness(self, brightness: f32) -> Self {
        Self { brightness, ..self }
    }

    pub fn summary(&self) -> String {
        format!(
            "{:?}Light{{ {}, brightness = {} }}",
            self.kind, self.position, self.brightness
        )
    }
}
