use math::hcm::{Point3, Vec3};
use std::fmt::{Display, Formatter, Result};

/// Contains geometric information on a ray-triangle intersection:
///  - `pos`: position of intersection, blended from the triangle vertices,
///  - `ray_t`: t-value of the ray at the intersection,
///  - `barycentric`: weights `(alpha, beta, gamma)` of the three vertices, summing to 1,
///  - `normal`: flat face normal `cross(p1 - p0, p2 - p0)`, unit-length. It keeps the winding
///    orientation and is not flipped towards the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub pos: Point3,
    pub ray_t: f32,
    pub barycentric: (f32, f32, f32),
    pub normal: Vec3,
}

impl Interaction {
    pub fn new(pos: Point3, ray_t: f32, barycentric: (f32, f32, f32), normal: Vec3) -> Interaction {
        Interaction {
            pos,
            ray_t,
            barycentric,
            normal,
        }
    }
}

impl Display for Interaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (a, b, c) = self.barycentric;
        write!(
            f,
            "pos = {}, t = {:.2}, bc = ({:.2}, {:.2}, {:.2}), normal = {}",
            self.pos, self.ray_t, a, b, c, self.normal
        )
    }
}
