use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait Two {
    fn two() -> Self;
}

impl Two for i32 {
    fn two() -> Self {
        2
    }
}

impl Two for f32 {
    fn two() -> Self {
        2.0
    }
}

impl Two for f64 {
    fn two() -> Self {
        2.0
    }
}

pub trait One {
    fn one() -> Self;
}

impl One for i32 {
    fn one() -> Self {
        1
    }
}

impl One for f32 {
    fn one() -> Self {
        1.0
    }
}

impl One for f64 {
    fn one() -> Self {
        1.0
    }
}

pub trait Zero {
    fn zero() -> Self;
}

impl Zero for i32 {
    fn zero() -> Self {
        0
    }
}

impl Zero for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

pub trait IsZero {
    fn is_zero(&self) -> bool;
}

impl IsZero for i32 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

// Thresholds sized to each format's precision.
impl IsZero for f32 {
    fn is_zero(&self) -> bool {
        self.abs() < 0.000_001
    }
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < 0.000_000_000_001
    }
}

pub trait FromF64 {
    fn from_f64(value: f64) -> Self;
}

impl FromF64 for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl FromF64 for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}

pub trait NumericOps:
    Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialOrd
{
}

impl NumericOps for i32 {}

impl NumericOps for f32 {}

impl NumericOps for f64 {}

pub trait Float: Display + Copy + Zero + One + Two + FromF64 + NumericOps {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn half(self) -> Self;
    fn sqrt(self) -> Self;
    fn to_radians(self) -> Self;
}

impl Float for f32 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn half(self) -> Self {
        self * 0.5
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn to_radians(self) -> Self {
        self.to_radians()
    }
}

impl Float for f64 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn half(self) -> Self {
        self * 0.5
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn to_radians(self) -> Self {
        self.to_radians()
    }
}
