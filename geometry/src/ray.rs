use std::fmt::{Display, Formatter, Result};

use math::hcm;

/// Represents a ray:
///
///   origin + t * direction
///
/// where t is in `[0, t_max]`.
///
/// The extent of the ray is by default infinite. Shadow rays span exactly from a surface point to
/// a light: their direction is the full (unnormalized) vector to the light and `t_max` is 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: hcm::Point3,
    pub dir: hcm::Vec3,
    pub t_max: f32,
}

impl Ray {
    pub fn new(origin: hcm::Point3, dir: hcm::Vec3) -> Self {
        Ray {
            origin,
            dir,
            t_max: f32::INFINITY,
        }
    }

    /// Builds a ray from `origin` that ends exactly at `target` (t = 1).
    pub fn segment(origin: hcm::Point3, target: hcm::Point3) -> Self {
        Self::new(origin, target - origin).with_extent(1.0)
    }

    pub fn with_extent(self, t_max: f32) -> Self {
        Ray { t_max, ..self }
    }

    /// Returns `None` if the given `t` is outside the ray's extent [0.0, `r.t_max`] (or NaN).
    /// `Some(t)` otherwise.
    pub fn truncated_t(&self, t: f32) -> Option<f32> {
        if t >= 0.0 && t <= self.t_max {
            Some(t)
        } else {
            None
        }
    }

    pub fn position_at(&self, t: f32) -> hcm::Point3 {
        self.origin + t * self.dir
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}",
            self.origin,
            self.dir,
            precision = precision
        )
    }
}
