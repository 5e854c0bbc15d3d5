use radiometry::color::Color;

/// Surface categories. Only the tag is stored; every kind is shaded the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Refracting surface. Refraction is not traced, so it contributes nothing beyond the
    /// diffuse, specular and reflected light every surface gets.
    Transparent,
    Glossy,
    Mirror,
}

impl Default for MaterialKind {
    fn default() -> Self {
        MaterialKind::Glossy
    }
}

/// Flat-shaded surface description, one per mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub kind: MaterialKind,
    /// Blinn-Phong exponent.
    pub shininess: f32,
    /// 0 is no reflection, 1 is a perfect mirror. Stored, but not used to weight reflected light.
    pub reflection: f32,
    /// Unused; -1 when unset.
    pub refraction_coefficient: f32,
}

impl Material {
    pub fn new(color: Color, shininess: f32, reflection: f32) -> Self {
        Self {
            color,
            shininess,
            reflection,
            ..Self::default()
        }
    }

    pub fn with_kind(self, kind: MaterialKind) -> Self {
        Self { kind, ..self }
    }

    pub fn with_refraction(self, refraction_coefficient: f32) -> Self {
        Self {
            refraction_coefficient,
            ..self
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{:?}{{ color = {:x}, shininess = {}, reflection = {} }}",
            self.kind, self.color, self.shininess, self.reflection
        )
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::black(),
            kind: MaterialKind::default(),
            shininess: 0.0,
            reflection: 0.0,
            refraction_coefficient: -1.0,
        }
    }
}
