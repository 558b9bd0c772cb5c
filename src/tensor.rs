use std::fmt::{Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use crate::matrix::Identity;
use crate::number_traits::{NumericOps, One, Zero};
use crate::vector::Vector3;

pub type Tensor3f = Tensor3<f32>;

/// 3x3 linear map, stored row-major. Shares the row-vector convention of
/// `Matrix4`: applying the map computes `result_i = sum_j(self[j][i] * v_j)`.
///
/// No invariants are enforced; a tensor may be singular.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tensor3<T = f32> {
    values: [T; 9],
}

impl<T> Tensor3<T> {
    const COLS: usize = 3;
    const ROWS: usize = 3;

    pub const fn with_values(values: [T; 9]) -> Self {
        Self { values }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Tensor3<U> {
        Tensor3 {
            values: self.values.map(f),
        }
    }

    pub fn cast<U>(self) -> Tensor3<U>
    where
        U: From<T>,
    {
        self.map(U::from)
    }
}

impl<T> Tensor3<T>
where
    T: Copy + Zero + Neg<Output = T>,
{
    /// Skew-symmetric operator of `w`: applying the result to any `v`
    /// yields `w.cross(v)`, which turns the cross product into a linear
    /// map (e.g. angular-velocity derivative operators).
    #[rustfmt::skip]
    pub fn star(w: &Vector3<T>) -> Self {
        Self::with_values([
            T::zero(), w.z, -w.y,
            -w.z, T::zero(), w.x,
            w.y, -w.x, T::zero(),
        ])
    }
}

impl<T> Tensor3<T>
where
    T: Copy + NumericOps + Zero + One,
{
    pub fn determinant(&self) -> T {
        self[0][0] * (self[1][1] * self[2][2] - self[1][2] * self[2][1])
            + self[0][1] * (self[1][2] * self[2][0] - self[1][0] * self[2][2])
            + self[0][2] * (self[1][0] * self[2][1] - self[1][1] * self[2][0])
    }

    /// Adjugate-over-determinant inverse with the same singular
    /// sentinel as `Matrix4::inverse`: an exactly-zero determinant
    /// yields the identity; a tiny one inverts as usual.
    #[rustfmt::skip]
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::zero() {
            return Self::identity();
        }

        Self::with_values([
            (self[1][1] * self[2][2] - self[1][2] * self[2][1]) / det,
            (self[0][2] * self[2][1] - self[0][1] * self[2][2]) / det,
            (self[0][1] * self[1][2] - self[0][2] * self[1][1]) / det,
            (self[1][2] * self[2][0] - self[1][0] * self[2][2]) / det,
            (self[0][0] * self[2][2] - self[0][2] * self[2][0]) / det,
            (self[0][2] * self[1][0] - self[0][0] * self[1][2]) / det,
            (self[1][0] * self[2][1] - self[1][1] * self[2][0]) / det,
            (self[0][1] * self[2][0] - self[0][0] * self[2][1]) / det,
            (self[0][0] * self[1][1] - self[0][1] * self[1][0]) / det,
        ])
    }

    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        Self::with_values([
            self[0][0], self[1][0], self[2][0],
            self[0][1], self[1][1], self[2][1],
            self[0][2], self[1][2], self[2][2],
        ])
    }
}

impl<T> Add for Tensor3<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut values = self.values;
        for (value, rhs_value) in values.iter_mut().zip(rhs.values) {
            *value = *value + rhs_value;
        }
        Self { values }
    }
}

impl<T> Sub for Tensor3<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut values = self.values;
        for (value, rhs_value) in values.iter_mut().zip(rhs.values) {
            *value = *value - rhs_value;
        }
        Self { values }
    }
}

impl<T> Mul<T> for Tensor3<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            values: self.values.map(|value| value * rhs),
        }
    }
}

/// Row-vector pairing, matching `Matrix4`'s vector transform.
impl<T> Mul<Vector3<T>> for Tensor3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    type Output = Vector3<T>;

    fn mul(self, v: Vector3<T>) -> Self::Output {
        Vector3::new(
            v.x * self[0][0] + v.y * self[1][0] + v.z * self[2][0],
            v.x * self[0][1] + v.y * self[1][1] + v.z * self[2][1],
            v.x * self[0][2] + v.y * self[1][2] + v.z * self[2][2],
        )
    }
}

impl<T> Mul<Self> for Tensor3<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut values = [T::zero(); 9];

        for j in 0..3 {
            for i in 0..3 {
                values[j * Self::COLS + i] = self.values[j * Self::COLS] * rhs.values[i]
                    + self.values[j * Self::COLS + 1] * rhs.values[i + Self::COLS]
                    + self.values[j * Self::COLS + 2] * rhs.values[i + Self::COLS * 2];
            }
        }

        Self { values }
    }
}

impl<T> MulAssign<Self> for Tensor3<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        // Snapshot first: the receiver is both input and output.
        let snapshot = *self;
        *self = snapshot * rhs;
    }
}

impl<T> Index<usize> for Tensor3<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

impl<T> IndexMut<usize> for Tensor3<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

#[rustfmt::skip]
impl<T> Identity for Tensor3<T>
    where T: One + Zero {
    fn identity() -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(),
                T::zero(), T::zero(), T::one()
            ]
        }
    }
}

impl<T> From<[[T; 3]; 3]> for Tensor3<T>
where
    T: Copy,
{
    fn from(rows: [[T; 3]; 3]) -> Self {
        Self::with_values([
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        ])
    }
}

/// Debug-only dump: space-separated components, one line per row.
impl<T> Display for Tensor3<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..Self::ROWS {
            for j in 0..Self::COLS {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.values[i * Self::COLS + j])?;
            }
            if i + 1 < Self::ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    fn assert_tensor_eq(actual: &Tensor3<f64>, expected: &Tensor3<f64>, tolerance: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert_float_absolute_eq!(actual[i][j], expected[i][j], tolerance);
            }
        }
    }

    #[test]
    fn identity() {
        let t = Tensor3::<i32>::identity();

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(t[i][j], i32::from(i == j));
            }
        }
    }

    #[test]
    fn add_sub() {
        let a = Tensor3::with_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let b = Tensor3::<i32>::identity();

        let sum = a + b;

        assert_eq!(sum[0][0], 2);
        assert_eq!(sum[0][1], 2);
        assert_eq!(sum[2][2], 10);
        assert_eq!(sum - b, a);
    }

    #[test]
    fn mul_scalar() {
        let t = Tensor3::with_values([1, 2, 3, 4, 5, 6, 7, 8, 9]) * 2;

        assert_eq!(t[0][0], 2);
        assert_eq!(t[2][2], 18);
    }

    #[test]
    fn mul_assign_matches_mul() {
        let a = Tensor3::with_values([1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
        let b = Tensor3::with_values([2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 2.0]);

        let mut c = a;
        c *= b;

        assert_tensor_eq(&c, &(a * b), 1e-12);
    }

    #[test]
    fn determinant() {
        let t = Tensor3::with_values([2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0]);

        assert_float_absolute_eq!(t.determinant(), 24.0, 1e-12);
    }

    #[test]
    fn inverse_roundtrip() {
        let t = Tensor3::with_values([1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);

        assert_tensor_eq(&(t * t.inverse()), &Tensor3::identity(), 1e-9);
        assert_tensor_eq(&t.inverse().inverse(), &t, 1e-9);
    }

    #[test]
    fn inverse_of_singular_is_identity() {
        let t = Tensor3::with_values([1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 0.0]);

        assert_float_absolute_eq!(t.determinant(), 0.0, 1e-12);
        assert_tensor_eq(&t.inverse(), &Tensor3::identity(), 0.0);
    }

    #[test]
    fn inverse_of_tiny_determinant_is_not_identity() {
        let t = Tensor3::<f64>::identity() * 0.001;

        let inv = t.inverse();

        assert_float_absolute_eq!(inv[0][0], 1000.0, 1e-6);
        assert_tensor_eq(&(t * inv), &Tensor3::identity(), 1e-9);
    }

    #[test]
    fn transpose_is_involution() {
        let t = Tensor3::with_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);

        assert_eq!(t.transpose()[0][1], 4);
        assert_eq!(t.transpose().transpose(), t);
    }

    #[test]
    fn apply_to_vector() {
        let t = Tensor3::<f64>::identity() * 2.0;

        let v = t * Vector3::new(1.0, -2.0, 3.0);

        assert_float_absolute_eq!(v.x, 2.0, 1e-12);
        assert_float_absolute_eq!(v.y, -4.0, 1e-12);
        assert_float_absolute_eq!(v.z, 6.0, 1e-12);
    }

    #[test]
    fn star_is_cross_product() {
        let star = Tensor3::star(&Vector3::new(0.0, 0.0, 1.0));

        let v = star * Vector3::new(1.0, 0.0, 0.0);

        assert_float_absolute_eq!(v.x, 0.0, 1e-12);
        assert_float_absolute_eq!(v.y, 1.0, 1e-12);
        assert_float_absolute_eq!(v.z, 0.0, 1e-12);
    }

    #[test]
    fn star_matches_cross_for_arbitrary_vectors() {
        let w = Vector3::new(1.5, -2.0, 0.5);
        let v = Vector3::new(-3.0, 1.0, 2.0);

        let by_star = Tensor3::star(&w) * v;
        let by_cross = w.cross(&v);

        assert_float_absolute_eq!(by_star.x, by_cross.x, 1e-12);
        assert_float_absolute_eq!(by_star.y, by_cross.y, 1e-12);
        assert_float_absolute_eq!(by_star.z, by_cross.z, 1e-12);
    }
}
