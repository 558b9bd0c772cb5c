use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::matrix::Matrix4;
use crate::number_traits::{Float, IsZero, NumericOps, One, Zero};
use crate::tensor::Tensor3;
use crate::vector::{Vector3, Vector4};

pub type Quaternionf = Quaternion<f32>;

/// Rotation quaternion with vector part `(x, y, z)` and scalar part `w`.
///
/// Rotation-producing operations (`rotation_matrix`, `rotation_tensor`,
/// `axis_rotation`, `slerp`) assume unit norm; this is never checked.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quaternion<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn from_scalar_vector(w: T, vector: Vector3<T>) -> Self {
        Self::new(vector.x, vector.y, vector.z, w)
    }
}

impl<T> Quaternion<T>
where
    T: Copy,
{
    /// The vector part as a `Vector3`, built from the components; the
    /// quaternion does not alias a vector in storage.
    pub fn vector_part(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn scalar_part(&self) -> T {
        self.w
    }
}

impl<T> Quaternion<T>
where
    T: Copy + NumericOps + Zero + One,
{
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn norm_squared(&self) -> T {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn dot(&self, other: &Self) -> T {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Equivalent 4x4 rotation for a unit quaternion; agrees with the
    /// `Matrix4` rotation factories for a matching axis and angle.
    #[allow(clippy::similar_names)]
    #[rustfmt::skip]
    pub fn rotation_matrix(&self) -> Matrix4<T> {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx2 = x2 * self.x;
        let yy2 = y2 * self.y;
        let zz2 = z2 * self.z;
        let xy2 = x2 * self.y;
        let xz2 = x2 * self.z;
        let yz2 = y2 * self.z;
        let wx2 = x2 * self.w;
        let wy2 = y2 * self.w;
        let wz2 = z2 * self.w;

        Matrix4::with_values([
            T::one() - yy2 - zz2, xy2 + wz2, xz2 - wy2, T::zero(),
            xy2 - wz2, T::one() - xx2 - zz2, yz2 + wx2, T::zero(),
            xz2 + wy2, yz2 - wx2, T::one() - xx2 - yy2, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    /// Same closed form as `rotation_matrix`, restricted to the 3x3
    /// linear block.
    #[allow(clippy::similar_names)]
    #[rustfmt::skip]
    pub fn rotation_tensor(&self) -> Tensor3<T> {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx2 = x2 * self.x;
        let yy2 = y2 * self.y;
        let zz2 = z2 * self.z;
        let xy2 = x2 * self.y;
        let xz2 = x2 * self.z;
        let yz2 = y2 * self.z;
        let wx2 = x2 * self.w;
        let wy2 = y2 * self.w;
        let wz2 = z2 * self.w;

        Tensor3::with_values([
            T::one() - yy2 - zz2, xy2 + wz2, xz2 - wy2,
            xy2 - wz2, T::one() - xx2 - zz2, yz2 + wx2,
            xz2 + wy2, yz2 - wx2, T::one() - xx2 - yy2,
        ])
    }
}

impl<T> Quaternion<T>
where
    T: Copy + Float,
{
    /// Unlike the vector types there is no zero-norm guard here; a zero
    /// quaternion is the caller's problem.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let norm = self.norm_squared().sqrt();
        Self::new(self.x / norm, self.y / norm, self.z / norm, self.w / norm)
    }

    /// Builds the rotation by `angle_radians` around this quaternion's
    /// vector part, which must already be a unit axis.
    pub fn axis_rotation(&self, angle_radians: T) -> Self {
        let half_angle = angle_radians.half();
        Self::from_scalar_vector(half_angle.cos(), self.vector_part() * half_angle.sin())
    }
}

impl<T> Quaternion<T>
where
    T: Copy + Float + IsZero,
{
    /// Shortest-arc spherical interpolation between two unit
    /// quaternions. Near-parallel inputs fall back to normalized
    /// linear interpolation, which keeps `slerp(t, q, q) == q`.
    pub fn slerp(t: T, a: Self, b: Self) -> Self {
        let mut cos_a = a.dot(&b);
        let mut b = b;
        if cos_a < T::zero() {
            cos_a = -cos_a;
            b = -b;
        }
        // Rounding can push the dot of two unit quaternions past 1,
        // where acos is undefined.
        if cos_a > T::one() {
            cos_a = T::one();
        }

        let alpha = cos_a.acos();
        let sin_a = alpha.sin();
        if sin_a.is_zero() {
            return (a * (T::one() - t) + b * t).normalized();
        }

        let sin_a_rev = T::one() / sin_a;
        a * (((T::one() - t) * alpha).sin() * sin_a_rev) + b * ((t * alpha).sin() * sin_a_rev)
    }
}

impl<T> Add for Quaternion<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl<T> AddAssign for Quaternion<T>
where
    T: Copy + Add<Output = T>,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T> Sub for Quaternion<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl<T> SubAssign for Quaternion<T>
where
    T: Copy + Sub<Output = T>,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T> Neg for Quaternion<T>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Hamilton product; composes the right-hand rotation first when both
/// operands are unit quaternions.
impl<T> Mul for Quaternion<T>
where
    T: Copy + NumericOps,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl<T> MulAssign for Quaternion<T>
where
    T: Copy + NumericOps,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> Mul<T> for Quaternion<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<T> MulAssign<T> for Quaternion<T>
where
    T: Copy + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T> Div<T> for Quaternion<T>
where
    T: Copy + Div<Output = T>,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

/// `q / p` is `q * p.conjugate() / p.norm_squared()` (the squared norm,
/// not the norm, is the denominator).
impl<T> Div for Quaternion<T>
where
    T: Copy + NumericOps + Zero + One,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self * (rhs.conjugate() / rhs.norm_squared())
    }
}

impl<T> From<Vector4<T>> for Quaternion<T> {
    fn from(v: Vector4<T>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl<T> Display for Quaternion<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.z, self.w)
    }
}
