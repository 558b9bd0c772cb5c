use std::fmt::{Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign};

use crate::number_traits::{Float, NumericOps, One, Zero};
use crate::tensor::Tensor3;
use crate::vector::{Vector3, Vector4};

pub type Matrix4f = Matrix4<f32>;

/// 4x4 homogeneous transform, stored row-major.
///
/// Points are row vectors: `v' = v * M`, so translation lives in the
/// fourth row and transforms compose left to right. Rows are contiguous
/// and can be uploaded as-is to a backend expecting row-major blocks.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Matrix4<T = f32> {
    values: [T; 16],
}

pub trait Identity {
    fn identity() -> Self;
}

impl<T> Matrix4<T> {
    const COLS: usize = 4;
    const ROWS: usize = 4;

    pub const fn with_values(values: [T; 16]) -> Self {
        Self { values }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Matrix4<U> {
        Matrix4 {
            values: self.values.map(f),
        }
    }

    /// Element-wise scalar conversion. Narrowing conversions are not
    /// provided here; go through `map` with an explicit cast instead.
    pub fn cast<U>(self) -> Matrix4<U>
    where
        U: From<T>,
    {
        self.map(U::from)
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Zero + One,
{
    #[rustfmt::skip]
    pub fn translation(translation: &Vector3<T>) -> Self {
        Self::with_values([
            T::one(), T::zero(), T::zero(), T::zero(),
            T::zero(), T::one(), T::zero(), T::zero(),
            T::zero(), T::zero(), T::one(), T::zero(),
            translation.x, translation.y, translation.z, T::one(),
        ])
    }

    #[rustfmt::skip]
    pub fn scale(scale: &Vector3<T>) -> Self {
        Self::with_values([
            scale.x, T::zero(), T::zero(), T::zero(),
            T::zero(), scale.y, T::zero(), T::zero(),
            T::zero(), T::zero(), scale.z, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    pub fn scale_uniform(scale: T) -> Self {
        Self::scale(&Vector3::splat(scale))
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Float,
{
    #[rustfmt::skip]
    pub fn rotation_x(angle_degrees: T) -> Self {
        let si = angle_degrees.to_radians().sin();
        let co = angle_degrees.to_radians().cos();

        Self::with_values([
            T::one(), T::zero(), T::zero(), T::zero(),
            T::zero(), co, si, T::zero(),
            T::zero(), -si, co, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_y(angle_degrees: T) -> Self {
        let si = angle_degrees.to_radians().sin();
        let co = angle_degrees.to_radians().cos();

        Self::with_values([
            co, T::zero(), -si, T::zero(),
            T::zero(), T::one(), T::zero(), T::zero(),
            si, T::zero(), co, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_z(angle_degrees: T) -> Self {
        let si = angle_degrees.to_radians().sin();
        let co = angle_degrees.to_radians().cos();

        Self::with_values([
            co, si, T::zero(), T::zero(),
            -si, co, T::zero(), T::zero(),
            T::zero(), T::zero(), T::one(), T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    /// Rodrigues' rotation about an arbitrary axis. The axis must be
    /// unit length.
    #[rustfmt::skip]
    pub fn rotation(angle_degrees: T, axis: &Vector3<T>) -> Self {
        let si = angle_degrees.to_radians().sin();
        let co = angle_degrees.to_radians().cos();
        let vers = T::one() - co;

        Self::with_values([
            co + axis.x * axis.x * vers, axis.x * axis.y * vers + axis.z * si, axis.x * axis.z * vers - axis.y * si, T::zero(),
            axis.x * axis.y * vers - axis.z * si, co + axis.y * axis.y * vers, axis.z * axis.y * vers + axis.x * si, T::zero(),
            axis.x * axis.z * vers + axis.y * si, axis.z * axis.y * vers - axis.x * si, co + axis.z * axis.z * vers, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }

    /// View matrix for an eye looking at `at`. The derived right/up/dir
    /// frame is right-handed and orthonormal for non-collinear inputs.
    #[rustfmt::skip]
    pub fn look_at(eye: Vector3<T>, at: Vector3<T>, up: Vector3<T>) -> Self {
        let dir = (at - eye).normalized();
        let right = dir.cross(&up).normalized();
        let up = right.cross(&dir);

        Self::with_values([
            right.x, up.x, -dir.x, T::zero(),
            right.y, up.y, -dir.y, T::zero(),
            right.z, up.z, -dir.z, T::zero(),
            -eye.dot(&right), -eye.dot(&up), eye.dot(&dir), T::one(),
        ])
    }

    /// Degenerate extents (e.g. `right == left`) divide by zero and
    /// propagate IEEE special values.
    #[rustfmt::skip]
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        Self::with_values([
            T::two() / (right - left), T::zero(), T::zero(), T::zero(),
            T::zero(), T::two() / (top - bottom), T::zero(), T::zero(),
            T::zero(), T::zero(), -(T::two() / (far - near)), T::zero(),
            -((left + right) / (right - left)), -((top + bottom) / (top - bottom)), -((far + near) / (far - near)), T::one(),
        ])
    }

    /// Perspective frustum. Note the `top`-before-`bottom` parameter
    /// order; `Camera::proj_set` passes the negative half-extent as
    /// `top`. Degenerate extents propagate IEEE special values.
    #[rustfmt::skip]
    pub fn frustum(left: T, right: T, top: T, bottom: T, near: T, far: T) -> Self {
        Self::with_values([
            T::two() * near / (right - left), T::zero(), T::zero(), T::zero(),
            T::zero(), T::two() * near / (top - bottom), T::zero(), T::zero(),
            (right + left) / (right - left), (top + bottom) / (top - bottom), (far + near) / (near - far), -T::one(),
            T::zero(), T::zero(), T::two() * near * far / (near - far), T::zero(),
        ])
    }
}

impl<T> Matrix4<T>
where
    T: Copy + NumericOps + Zero + One,
{
    #[allow(clippy::too_many_arguments)]
    fn det3(a11: T, a12: T, a13: T, a21: T, a22: T, a23: T, a31: T, a32: T, a33: T) -> T {
        a11 * (a22 * a33 - a23 * a32)
            + a12 * (a23 * a31 - a21 * a33)
            + a13 * (a21 * a32 - a22 * a31)
    }

    /// First-row cofactor expansion; exact for any scalar supporting
    /// arithmetic, no elimination involved.
    #[rustfmt::skip]
    pub fn determinant(&self) -> T {
        self[0][0] * Self::det3(
            self[1][1], self[1][2], self[1][3],
            self[2][1], self[2][2], self[2][3],
            self[3][1], self[3][2], self[3][3])
        - self[0][1] * Self::det3(
            self[1][0], self[1][2], self[1][3],
            self[2][0], self[2][2], self[2][3],
            self[3][0], self[3][2], self[3][3])
        + self[0][2] * Self::det3(
            self[1][0], self[1][1], self[1][3],
            self[2][0], self[2][1], self[2][3],
            self[3][0], self[3][1], self[3][3])
        - self[0][3] * Self::det3(
            self[1][0], self[1][1], self[1][2],
            self[2][0], self[2][1], self[2][2],
            self[3][0], self[3][1], self[3][2])
    }

    /// Adjugate-over-determinant inverse. An exactly-zero determinant
    /// yields the identity, so an identity result is ambiguous; test
    /// `determinant()` first when that matters. A merely tiny
    /// determinant is not intercepted and inverts as usual.
    #[rustfmt::skip]
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::zero() {
            return Self::identity();
        }

        Self::with_values([
            Self::det3(
                self[1][1], self[1][2], self[1][3],
                self[2][1], self[2][2], self[2][3],
                self[3][1], self[3][2], self[3][3]) / det,
            -(Self::det3(
                self[0][1], self[0][2], self[0][3],
                self[2][1], self[2][2], self[2][3],
                self[3][1], self[3][2], self[3][3]) / det),
            Self::det3(
                self[0][1], self[0][2], self[0][3],
                self[1][1], self[1][2], self[1][3],
                self[3][1], self[3][2], self[3][3]) / det,
            -(Self::det3(
                self[0][1], self[0][2], self[0][3],
                self[1][1], self[1][2], self[1][3],
                self[2][1], self[2][2], self[2][3]) / det),
            -(Self::det3(
                self[1][0], self[1][2], self[1][3],
                self[2][0], self[2][2], self[2][3],
                self[3][0], self[3][2], self[3][3]) / det),
            Self::det3(
                self[0][0], self[0][2], self[0][3],
                self[2][0], self[2][2], self[2][3],
                self[3][0], self[3][2], self[3][3]) / det,
            -(Self::det3(
                self[0][0], self[0][2], self[0][3],
                self[1][0], self[1][2], self[1][3],
                self[3][0], self[3][2], self[3][3]) / det),
            Self::det3(
                self[0][0], self[0][2], self[0][3],
                self[1][0], self[1][2], self[1][3],
                self[2][0], self[2][2], self[2][3]) / det,
            Self::det3(
                self[1][0], self[1][1], self[1][3],
                self[2][0], self[2][1], self[2][3],
                self[3][0], self[3][1], self[3][3]) / det,
            -(Self::det3(
                self[0][0], self[0][1], self[0][3],
                self[2][0], self[2][1], self[2][3],
                self[3][0], self[3][1], self[3][3]) / det),
            Self::det3(
                self[0][0], self[0][1], self[0][3],
                self[1][0], self[1][1], self[1][3],
                self[3][0], self[3][1], self[3][3]) / det,
            -(Self::det3(
                self[0][0], self[0][1], self[0][3],
                self[1][0], self[1][1], self[1][3],
                self[2][0], self[2][1], self[2][3]) / det),
            -(Self::det3(
                self[1][0], self[1][1], self[1][2],
                self[2][0], self[2][1], self[2][2],
                self[3][0], self[3][1], self[3][2]) / det),
            Self::det3(
                self[0][0], self[0][1], self[0][2],
                self[2][0], self[2][1], self[2][2],
                self[3][0], self[3][1], self[3][2]) / det,
            -(Self::det3(
                self[0][0], self[0][1], self[0][2],
                self[1][0], self[1][1], self[1][2],
                self[3][0], self[3][1], self[3][2]) / det),
            Self::det3(
                self[0][0], self[0][1], self[0][2],
                self[1][0], self[1][1], self[1][2],
                self[2][0], self[2][1], self[2][2]) / det,
        ])
    }

    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        Self::with_values([
            self[0][0], self[1][0], self[2][0], self[3][0],
            self[0][1], self[1][1], self[2][1], self[3][1],
            self[0][2], self[1][2], self[2][2], self[3][2],
            self[0][3], self[1][3], self[2][3], self[3][3],
        ])
    }

    /// Affine transform: 3x3 block plus the translation row.
    pub fn transform_point(&self, v: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            v.x * self[0][0] + v.y * self[1][0] + v.z * self[2][0] + self[3][0],
            v.x * self[0][1] + v.y * self[1][1] + v.z * self[2][1] + self[3][1],
            v.x * self[0][2] + v.y * self[1][2] + v.z * self[2][2] + self[3][2],
        )
    }

    /// Linear transform only; use for direction vectors.
    pub fn transform_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            v.x * self[0][0] + v.y * self[1][0] + v.z * self[2][0],
            v.x * self[0][1] + v.y * self[1][1] + v.z * self[2][1],
            v.x * self[0][2] + v.y * self[1][2] + v.z * self[2][2],
        )
    }

    /// Full homogeneous transform with perspective divide by the
    /// computed w.
    pub fn transform_homogeneous(&self, v: &Vector3<T>) -> Vector3<T> {
        let w = T::one() / (v.x * self[0][3] + v.y * self[1][3] + v.z * self[2][3] + self[3][3]);

        Vector3::new(
            (v.x * self[0][0] + v.y * self[1][0] + v.z * self[2][0] + self[3][0]) * w,
            (v.x * self[0][1] + v.y * self[1][1] + v.z * self[2][1] + self[3][1]) * w,
            (v.x * self[0][2] + v.y * self[1][2] + v.z * self[2][2] + self[3][2]) * w,
        )
    }

    /// Normal-vector transform through the inverse transpose, required
    /// under non-uniform scale. Recomputed on every call.
    pub fn transform_normal(&self, v: &Vector3<T>) -> Vector3<T> {
        self.inverse().transpose().transform_vector(v)
    }
}

/// Row-vector pairing: `result_i = sum_j(self[j][i] * v_j)`.
impl<T> Mul<Vector4<T>> for Matrix4<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    type Output = Vector4<T>;

    fn mul(self, v: Vector4<T>) -> Self::Output {
        Vector4::new(
            self[0][0] * v.x + self[1][0] * v.y + self[2][0] * v.z + self[3][0] * v.w,
            self[0][1] * v.x + self[1][1] * v.y + self[2][1] * v.z + self[3][1] * v.w,
            self[0][2] * v.x + self[1][2] * v.y + self[2][2] * v.z + self[3][2] * v.w,
            self[0][3] * v.x + self[1][3] * v.y + self[2][3] * v.z + self[3][3] * v.w,
        )
    }
}

impl<T> Mul<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut values = [T::zero(); 16];

        for j in 0..4 {
            for i in 0..4 {
                values[j * Self::COLS + i] = self.values[j * Self::COLS] * rhs.values[i]
                    + self.values[j * Self::COLS + 1] * rhs.values[i + Self::COLS]
                    + self.values[j * Self::COLS + 2] * rhs.values[i + Self::COLS * 2]
                    + self.values[j * Self::COLS + 3] * rhs.values[i + Self::COLS * 3];
            }
        }

        Self { values }
    }
}

impl<T> MulAssign<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        // Snapshot first: the receiver is both input and output.
        let snapshot = *self;
        *self = snapshot * rhs;
    }
}

impl<T> Index<usize> for Matrix4<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

impl<T> IndexMut<usize> for Matrix4<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index * Self::COLS..index * Self::COLS + Self::COLS]
    }
}

#[rustfmt::skip]
impl<T> Identity for Matrix4<T>
    where T: One + Zero {
    fn identity() -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(), T::zero(),
                T::zero(), T::zero(), T::one(), T::zero(),
                T::zero(), T::zero(), T::zero(), T::one()
            ]
        }
    }
}

impl<T> From<[[T; 4]; 4]> for Matrix4<T>
where
    T: Copy,
{
    #[rustfmt::skip]
    fn from(rows: [[T; 4]; 4]) -> Self {
        Self::with_values([
            rows[0][0], rows[0][1], rows[0][2], rows[0][3],
            rows[1][0], rows[1][1], rows[1][2], rows[1][3],
            rows[2][0], rows[2][1], rows[2][2], rows[2][3],
            rows[3][0], rows[3][1], rows[3][2], rows[3][3],
        ])
    }
}

/// Embeds the 3x3 linear block; the bottom-right corner is set to one
/// but the rest of the border stays zero, so the result is linear, not
/// an identity-augmented affine transform.
impl<T> From<Tensor3<T>> for Matrix4<T>
where
    T: Copy + Zero + One,
{
    fn from(tensor: Tensor3<T>) -> Self {
        let mut matrix = Self::with_values([T::zero(); 16]);
        for i in 0..3 {
            for j in 0..3 {
                matrix[i][j] = tensor[i][j];
            }
        }
        matrix[3][3] = T::one();
        matrix
    }
}

/// Debug-only dump: space-separated components, one line per row. Not a
/// stable interchange format.
impl<T> Display for Matrix4<T>
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

    fn assert_matrix_eq(actual: &Matrix4<f64>, expected: &Matrix4<f64>, tolerance: f64) {
        for i in 0..4 {
            for j in 0..4 {
                assert_float_absolute_eq!(actual[i][j], expected[i][j], tolerance);
            }
        }
    }

    #[test]
    fn identity() {
        let m = Matrix4::<i32>::identity();

        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m[i][j], i32::from(i == j));
            }
        }
    }

    #[test]
    fn identity_determinant() {
        assert_float_absolute_eq!(Matrix4::<f64>::identity().determinant(), 1.0, 1e-12);
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix4::<i32>::identity();
        m[3][2] = 5;

        assert_eq!(m[3][2], 5);
    }

    #[test]
    fn row_is_contiguous() {
        let m = Matrix4::<i32>::with_values([
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
        ]);

        assert_eq!(&m[1], &[4, 5, 6, 7]);
    }

    #[test]
    fn translate_then_scale() {
        let m = Matrix4::translation(&Vector3::new(10.0, 0.0, -1.0)) * Matrix4::scale_uniform(2.0);

        let p = m.transform_point(&Vector3::new(1.0, 2.0, 3.0));

        assert_float_absolute_eq!(p.x, 22.0, 1e-12);
        assert_float_absolute_eq!(p.y, 4.0, 1e-12);
        assert_float_absolute_eq!(p.z, 4.0, 1e-12);
    }

    #[test]
    fn mul_vector4_uses_row_vector_pairing() {
        let m = Matrix4::translation(&Vector3::new(1.0, 2.0, 3.0));

        let v = m * Vector4::new(0.0, 0.0, 0.0, 1.0);

        assert_float_absolute_eq!(v.x, 1.0, 1e-12);
        assert_float_absolute_eq!(v.y, 2.0, 1e-12);
        assert_float_absolute_eq!(v.z, 3.0, 1e-12);
        assert_float_absolute_eq!(v.w, 1.0, 1e-12);
    }

    #[test]
    fn mul_assign_matches_mul() {
        let a = Matrix4::rotation_y(30.0) * Matrix4::translation(&Vector3::new(1.0, 2.0, 3.0));
        let b = Matrix4::scale(&Vector3::new(2.0, 1.0, 0.5));

        let mut c = a;
        c *= b;

        assert_matrix_eq(&c, &(a * b), 1e-12);
    }

    #[test]
    fn scale_determinant_is_cubed() {
        let k: f64 = 3.0;
        let m = Matrix4::scale_uniform(k);

        assert_float_absolute_eq!(m.determinant(), k * k * k, 1e-12);
    }

    #[test]
    fn inverse_roundtrip() {
        #[rustfmt::skip]
        let m = Matrix4::<f64>::with_values([
            1.0, 0.0, 0.0, 1.0,
            0.0, 2.0, 1.0, 2.0,
            2.0, 1.0, 0.0, 1.0,
            2.0, 0.0, 1.0, 4.0,
        ]);

        assert_matrix_eq(&(m * m.inverse()), &Matrix4::identity(), 1e-9);
        assert_matrix_eq(&m.inverse().inverse(), &m, 1e-9);
    }

    #[test]
    fn inverse_of_singular_is_identity() {
        #[rustfmt::skip]
        let m = Matrix4::<f64>::with_values([
            1.0, 2.0, 3.0, 4.0,
            2.0, 4.0, 6.0, 8.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);

        assert_float_absolute_eq!(m.determinant(), 0.0, 1e-12);
        assert_matrix_eq(&m.inverse(), &Matrix4::identity(), 0.0);
    }

    #[test]
    fn inverse_of_tiny_determinant_is_not_identity() {
        // det = 1e-9; well below any epsilon but still invertible.
        let m = Matrix4::<f64>::scale_uniform(0.001);

        let inv = m.inverse();

        assert_float_absolute_eq!(inv[0][0], 1000.0, 1e-6);
        assert_matrix_eq(&(m * inv), &Matrix4::identity(), 1e-9);
    }

    #[test]
    fn transpose_is_involution() {
        #[rustfmt::skip]
        let m = Matrix4::<i32>::with_values([
            1, 2, 3, 4,
            5, 6, 7, 8,
            9, 10, 11, 12,
            13, 14, 15, 16,
        ]);

        let t = m.transpose();

        assert_eq!(t[0][1], 5);
        assert_eq!(t[1][0], 2);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn rotation_x_quarter_turn() {
        let m = Matrix4::rotation_x(90.0f64);

        let v = m.transform_vector(&Vector3::new(0.0, 1.0, 0.0));

        assert_float_absolute_eq!(v.x, 0.0, 1e-9);
        assert_float_absolute_eq!(v.y, 0.0, 1e-9);
        assert_float_absolute_eq!(v.z, 1.0, 1e-9);
    }

    #[test]
    fn rotation_about_x_axis_matches_rotation_x() {
        let axis = Matrix4::rotation(37.0f64, &Vector3::new(1.0, 0.0, 0.0));
        let fixed = Matrix4::rotation_x(37.0f64);

        assert_matrix_eq(&axis, &fixed, 1e-9);
    }

    #[test]
    fn rotation_preserves_length() {
        let m = Matrix4::rotation(71.0f64, &Vector3::new(1.0, 2.0, -1.0).normalized());

        let v = m.transform_vector(&Vector3::new(0.3, -4.0, 2.5));

        assert_float_absolute_eq!(
            v.norm(),
            Vector3::new(0.3, -4.0, 2.5).norm(),
            1e-9
        );
    }

    #[test]
    fn look_at_rows_are_orthonormal() {
        let m = Matrix4::look_at(
            Vector3::new(0.0f64, 0.0, 5.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );

        let right = Vector3::new(m[0][0], m[1][0], m[2][0]);
        let up = Vector3::new(m[0][1], m[1][1], m[2][1]);
        let dir = Vector3::new(-m[0][2], -m[1][2], -m[2][2]);

        assert_float_absolute_eq!(right.norm(), 1.0, 1e-9);
        assert_float_absolute_eq!(up.norm(), 1.0, 1e-9);
        assert_float_absolute_eq!(dir.norm(), 1.0, 1e-9);
        assert_float_absolute_eq!(right.dot(&up), 0.0, 1e-9);
        assert_float_absolute_eq!(right.dot(&dir), 0.0, 1e-9);
        assert_float_absolute_eq!(up.dot(&dir), 0.0, 1e-9);
        // Right-handed frame: right x dir recovers up.
        let cross = right.cross(&dir);
        assert_float_absolute_eq!(cross.x, up.x, 1e-9);
        assert_float_absolute_eq!(cross.y, up.y, 1e-9);
        assert_float_absolute_eq!(cross.z, up.z, 1e-9);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vector3::new(1.0f64, 2.0, 3.0);
        let m = Matrix4::look_at(eye, Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));

        let at_origin = m.transform_point(&eye);

        assert_float_absolute_eq!(at_origin.x, 0.0, 1e-9);
        assert_float_absolute_eq!(at_origin.y, 0.0, 1e-9);
        assert_float_absolute_eq!(at_origin.z, 0.0, 1e-9);
    }

    #[test]
    fn orthographic_exact_entries() {
        let m = Matrix4::orthographic(-1.0f64, 1.0, -1.0, 1.0, 1.0, 100.0);

        #[rustfmt::skip]
        let expected = Matrix4::with_values([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, -2.0 / 99.0, 0.0,
            0.0, 0.0, -101.0 / 99.0, 1.0,
        ]);

        assert_matrix_eq(&m, &expected, 1e-12);
    }

    #[test]
    fn frustum_exact_entries() {
        let m = Matrix4::frustum(-1.0f64, 1.0, -1.0, 1.0, 1.0, 100.0);

        #[rustfmt::skip]
        let expected = Matrix4::with_values([
            1.0, 0.0, 0.0, 0.0,
            0.0, -1.0, 0.0, 0.0,
            0.0, 0.0, 101.0 / -99.0, -1.0,
            0.0, 0.0, 200.0 / -99.0, 0.0,
        ]);

        assert_matrix_eq(&m, &expected, 1e-12);
    }

    #[test]
    fn transform_normal_under_non_uniform_scale() {
        let m = Matrix4::scale(&Vector3::new(2.0f64, 1.0, 1.0));

        let n = m.transform_normal(&Vector3::new(1.0, 0.0, 0.0));

        assert_float_absolute_eq!(n.x, 0.5, 1e-9);
        assert_float_absolute_eq!(n.y, 0.0, 1e-9);
        assert_float_absolute_eq!(n.z, 0.0, 1e-9);
    }

    #[test]
    fn transform_homogeneous_divides_by_w() {
        let m = Matrix4::frustum(-1.0f64, 1.0, -1.0, 1.0, 1.0, 100.0);

        // A point on the near plane in front of the eye (-z).
        let p = m.transform_homogeneous(&Vector3::new(0.5, 0.5, -1.0));

        assert_float_absolute_eq!(p.x, 0.5, 1e-9);
        assert_float_absolute_eq!(p.y, -0.5, 1e-9);
    }

    #[test]
    fn from_tensor_keeps_zero_border() {
        let t = Tensor3::with_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let m = Matrix4::from(t);

        assert_eq!(m[0][1], 2);
        assert_eq!(m[2][2], 9);
        assert_eq!(m[3][3], 1);
        assert_eq!(m[0][3], 0);
        assert_eq!(m[3][0], 0);
    }

    #[test]
    fn from_nested_rows() {
        let m = Matrix4::from([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]]);

        assert_eq!(&m[1], &[5, 6, 7, 8]);
        assert_eq!(m[3][0], 13);
    }

    #[test]
    fn cast_widens_scalars() {
        let m = Matrix4::<i32>::identity().cast::<f64>();

        assert_float_absolute_eq!(m.determinant(), 1.0, 1e-12);
    }

    #[test]
    fn display_is_one_line_per_row() {
        let m = Matrix4::<i32>::identity();

        assert_eq!(
            format!("{m}"),
            "1 0 0 0\n0 1 0 0\n0 0 1 0\n0 0 0 1"
        );
    }
}
