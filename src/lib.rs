#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate assert_float_eq;

pub mod camera;
pub mod matrix;
pub mod number_traits;
pub mod quaternion;
pub mod tensor;
pub mod vector;
