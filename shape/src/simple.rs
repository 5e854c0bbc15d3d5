use math::float::{barycentric_lerp, Float};
use math::hcm::{Mat3, Point3};

use crate::{Interaction, Shape};
use geometry::ray::Ray;

#[derive(Debug, Clone, Copy)]
pub struct IsolatedTriangle {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
}

impl IsolatedTriangle {
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self { p0, p1, p2 }
    }
    pub fn centroid(&self) -> Point3 {
        barycentric_lerp((self.p0, self.p1, self.p2), (1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0))
    }
}

impl Shape for IsolatedTriangle {
    fn summary(&self) -> String {
        format!("Triangle[{}, {}, {}]", self.p0, self.p1, self.p2)
    }
    fn intersect(&self, r: &Ray, margin: f32) -> Option<Interaction> {
        intersect_triangle(self.p0, self.p1, self.p2, r, margin)
    }
    fn occludes(&self, r: &Ray, margin: f32) -> bool {
        intersect_triangle(self.p0, self.p1, self.p2, r, margin).is_some()
    }
}

#[rustfmt::skip]
/// Computes ray-triangle intersection within the ray's extent `[0, r.t_max]`.
///
/// The triangle's plane gets a local orthonormal frame `(u, w, n)`: `u` along `p1 - p0`, `n` out
/// of the plane and `w = n x u`. In that frame the ray origin sits at height `s.z` above the plane
/// and the direction climbs `l.z` per unit of t, so the plane is reached at `t = -s.z / l.z`.
///
/// Returns `None` when:
/// - the triangle is degenerate, or the ray is parallel to its plane,
/// - t is outside the ray's extent,
/// - the hit lies within `margin` of the ray origin on every axis (self-intersection),
/// - any barycentric weight is negative.
pub fn intersect_triangle(
    p0: Point3, p1: Point3, p2: Point3, r: &Ray, margin: f32,
) -> Option<Interaction> {
    let p_u = p1 - p0;
    let p_v = p2 - p0;

    let pcs_u = p_u.try_hat()?;
    let pcs_normal = pcs_u.cross(p_v).try_hat()?;
    let pcs_w = pcs_normal.cross(pcs_u).try_hat()?;
    let to_plane = Mat3::from_rows(pcs_u, pcs_w, pcs_normal);

    let pcs_s = to_plane * (r.origin - p0);
    let pcs_l = to_plane * r.dir;
    let t = (-pcs_s.z).checked_divide(pcs_l.z)?;
    let t = r.truncated_t(t)?;

    let p = r.position_at(t);
    if p.within_box_of(r.origin, margin) {
        return None;
    }

    // p - p0 = beta * AB + gamma * AC. Dotting with (n x AC) cancels the AC term and vice versa.
    let ap = p - p0;
    let n_cross_ac = pcs_normal.cross(p_v);
    let n_cross_ab = pcs_normal.cross(p_u);
    let beta = ap.dot(n_cross_ac).checked_divide(p_u.dot(n_cross_ac))?;
    let gamma = ap.dot(n_cross_ab).checked_divide(p_v.dot(n_cross_ab))?;
    let alpha = 1.0 - beta - gamma;
    if alpha < 0.0 || beta < 0.0 || gamma < 0.0 {
        return None;
    }

    let pos = barycentric_lerp((p0, p1, p2), (alpha, beta, gamma));
    Some(Interaction::new(pos, t, (alpha, beta, gamma), pcs_normal))
}
