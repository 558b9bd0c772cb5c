use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::number_traits::{Float, Zero};

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub struct $name<T = f32> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where T: Copy {
            pub fn splat(value: T) -> Self {
                Self {
                    $($dim: value,)*
                }
            }
        }

        impl<T> $name<T>
        where T: Zero + Float {
            pub fn dot(&self, other: &Self) -> T {
                let mut dot = T::zero();
                $(dot += self.$dim * other.$dim;)*
                dot
            }

            pub fn norm_squared(&self) -> T {
                self.dot(self)
            }

            pub fn norm(&self) -> T {
                self.norm_squared().sqrt()
            }

            /// Exactly-zero vectors are left untouched instead of dividing
            /// by a zero norm.
            pub fn normalize(&mut self) {
                if $(self.$dim == T::zero() &&)* true {
                    return;
                }
                let norm = self.norm();
                $(self.$dim /= norm;)*
            }

            pub fn normalized(&self) -> Self {
                let mut normalized = *self;
                normalized.normalize();
                normalized
            }

            pub fn distance(&self, other: &Self) -> T {
                (*self - *other).norm()
            }

            pub fn lerp(&self, other: &Self, t: T) -> Self {
                Self {
                    $($dim: self.$dim + (other.$dim - self.$dim) * t,)*
                }
            }

            pub fn min(&self, other: &Self) -> Self {
                Self {
                    $($dim: if other.$dim < self.$dim { other.$dim } else { self.$dim },)*
                }
            }

            pub fn max(&self, other: &Self) -> Self {
                Self {
                    $($dim: if other.$dim > self.$dim { other.$dim } else { self.$dim },)*
                }
            }

            pub fn min_component(&self) -> T {
                let components = [$(self.$dim),*];
                let mut min = components[0];
                for component in components {
                    if component < min {
                        min = component;
                    }
                }
                min
            }

            pub fn max_component(&self) -> T {
                let components = [$(self.$dim),*];
                let mut max = components[0];
                for component in components {
                    if component > max {
                        max = component;
                    }
                }
                max
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: T) {
                *self = Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> Mul for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs.$dim),*
                }
            }
        }

        impl<T> MulAssign for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim * rhs.$dim),*
                }
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: T) {
                *self = Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> Div for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs.$dim),*
                }
            }
        }

        impl<T> DivAssign for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim / rhs.$dim),*
                }
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }
    };
}

struct_vec!(Vector2: "{} {}", (x: T => 0, y: T => 1,));
struct_vec!(Vector3: "{} {} {}", (x: T => 0, y: T => 1, z: T => 2,));
struct_vec!(Vector4: "{} {} {} {}", (x: T => 0, y: T => 1, z: T => 2, w: T => 3,));

impl<T> Vector3<T>
where
    T: Copy + Float,
{
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T> From<[T; 2]> for Vector2<T>
where
    T: Copy,
{
    fn from(value: [T; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    fn from(value: Vector2<T>) -> Self {
        [value.x, value.y]
    }
}

impl<T> From<[T; 3]> for Vector3<T>
where
    T: Copy,
{
    fn from(value: [T; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<T> From<[T; 4]> for Vector4<T>
where
    T: Copy,
{
    fn from(value: [T; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl<T> From<Vector4<T>> for [T; 4] {
    fn from(value: Vector4<T>) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}
