/// Smallest magnitude a denominator may have before a division is treated as degenerate.
pub const ZERO_EPSILON: f32 = 1e-8;

/// Represents an angle, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub fn new_rad(radians: f32) -> Self {
        Self { radians }
    }
    pub fn new_deg(degrees: f32) -> Self {
        Self::new_rad(degrees.to_radians())
    }
    pub fn to_rad(self) -> f32 {
        self.radians
    }
    pub fn to_deg(self) -> f32 {
        self.radians.to_degrees()
    }
    pub fn tan(self) -> f32 {
        self.radians.tan()
    }
}

impl std::ops::Mul<f32> for Angle {
    type Output = Angle;
    fn mul(self, s: f32) -> Angle {
        Angle::new_rad(self.radians * s)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(1);
        write!(f, "{:.p$}deg", self.to_deg(), p = precision)
    }
}

/// Computes the barycentric interpolation given 3 attribute values and 3 barycentric coordinates.
/// The attribute can be of various types: as long as the difference type (`T - T`) can be scaled
/// by a `f32` and added back to a `T`.
/// - `Point3` can't be scaled, but the difference type `Vec3` can, and point + vector is a point.
///
/// The coefficients are expected to sum to 1; only the first two are read.
pub fn barycentric_lerp<T, U>(values: (T, T, T), bc_coeffs: (f32, f32, f32)) -> T
where
    T: Copy + std::ops::Sub<T, Output = U>,
    U: Copy
        + std::ops::Mul<f32, Output = U>
        + std::ops::Add<T, Output = T>
        + std::ops::Add<U, Output = U>,
{
    let (a, b, c) = values;
    let (bc0, bc1, _) = bc_coeffs;
    //   bc0 * a + bc1 * b + (1 - bc0 - bc1) * c
    // = bc0 * (a-c) + bc1 * (b-c) + c
    (a - c) * bc0 + (b - c) * bc1 + c
}

pub trait Float: Sized {
    /// Computes `x / y` unless `|y|` is below `ZERO_EPSILON` or the quotient is not finite.
    fn checked_divide(self, divisor: Self) -> Option<Self>;
    fn dist_to(self, other: Self) -> Self;
}

impl Float for f32 {
    /// ```
    /// use math::float::Float;
    /// assert_eq!(1.0f32.checked_divide(1e-12), None);
    /// assert_eq!(f32::NAN.checked_divide(2.0), None);
    /// assert_eq!(3.0f32.checked_divide(-1.5), Some(-2.0));
    /// ```
    fn checked_divide(self, divisor: Self) -> Option<Self> {
        if divisor.abs() < ZERO_EPSILON {
            return None;
        }
        let quotient = self / divisor;
        quotient.is_finite().then(|| quotient)
    }

    fn dist_to(self, other: Self) -> Self {
        (self - other).abs()
    }
}

#[macro_export]
macro_rules! assert_le {
    ($left:expr, $right:expr) => {
        if $left > $right {
            panic!(
                "Assertion failed: {} <= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_ge {
    ($left:expr, $right:expr) => {
        if $left < $right {
            panic!(
                "Assertion failed: {} >= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}
