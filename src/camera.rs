use crate::matrix::{Identity, Matrix4};
use crate::number_traits::Float;
use crate::vector::Vector3;

pub type Cameraf = Camera<f32>;

/// Viewer state bundling a look-at frame with a perspective projection.
///
/// `matr_view`, `matr_proj` and `matr_vp` are plain fields; they only
/// reflect the other fields after `set`, `proj_set` or `resize` has
/// run. Mutating `loc`, `proj_size` and friends directly leaves the
/// matrices stale until the next call.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera<T = f32> {
    pub frame_w: u32,
    pub frame_h: u32,

    pub loc: Vector3<T>,
    pub at: Vector3<T>,
    pub dir: Vector3<T>,
    pub right: Vector3<T>,
    pub up: Vector3<T>,

    pub proj_dist: T,
    pub proj_size: T,
    pub far_clip: T,
    pub wp: T,
    pub hp: T,

    pub matr_view: Matrix4<T>,
    pub matr_proj: Matrix4<T>,
    pub matr_vp: Matrix4<T>,
}

impl<T> Camera<T>
where
    T: Float,
{
    /// Rebuilds the projection from `proj_size`, `proj_dist`,
    /// `far_clip` and the frame dimensions. The plane half-extents
    /// start square and the larger frame dimension is widened to match
    /// the aspect ratio, so a unit square stays a square on screen.
    pub fn proj_set(&mut self) {
        self.wp = self.proj_size;
        self.hp = self.proj_size;
        if self.frame_w > self.frame_h {
            self.wp *= T::from_f64(f64::from(self.frame_w) / f64::from(self.frame_h));
        } else {
            self.hp *= T::from_f64(f64::from(self.frame_h) / f64::from(self.frame_w));
        }

        self.matr_proj = Matrix4::frustum(
            -self.wp.half(),
            self.wp.half(),
            -self.hp.half(),
            self.hp.half(),
            self.proj_dist,
            self.far_clip,
        );
        self.matr_vp = self.matr_view * self.matr_proj;
    }

    /// Stores the new frame size and refreshes the projection. A zero
    /// width or height leaves the camera untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.frame_w = width;
        self.frame_h = height;
        self.proj_set();
    }

    /// Rebuilds the view matrix and reads the orthonormalized frame
    /// vectors back out of it, so `dir`, `right` and `up` always agree
    /// with `matr_view` even when the `up` argument was not
    /// perpendicular to the view direction.
    pub fn set(&mut self, loc: Vector3<T>, at: Vector3<T>, up: Vector3<T>) {
        self.matr_view = Matrix4::look_at(loc, at, up);

        self.loc = loc;
        self.at = at;
        self.right = Vector3::new(
            self.matr_view[0][0],
            self.matr_view[1][0],
            self.matr_view[2][0],
        );
        self.up = Vector3::new(
            self.matr_view[0][1],
            self.matr_view[1][1],
            self.matr_view[2][1],
        );
        self.dir = Vector3::new(
            -self.matr_view[0][2],
            -self.matr_view[1][2],
            -self.matr_view[2][2],
        );

        self.matr_vp = self.matr_view * self.matr_proj;
    }
}

impl<T> Default for Camera<T>
where
    T: Float,
{
    fn default() -> Self {
        let loc = Vector3::splat(T::from_f64(200.0));
        let at = Vector3::splat(T::zero());
        let up = Vector3::new(T::zero(), T::one(), T::zero());
        let dir = (at - loc).normalized();

        Self {
            frame_w: 1432,
            frame_h: 720,
            loc,
            at,
            dir,
            right: dir.cross(&up).normalized(),
            up,
            proj_dist: T::from_f64(0.1),
            proj_size: T::from_f64(0.1),
            far_clip: T::from_f64(10000.0),
            wp: T::from_f64(0.1),
            hp: T::from_f64(0.1),
            matr_view: Matrix4::identity(),
            matr_proj: Matrix4::identity(),
            matr_vp: Matrix4::identity(),
        }
    }
}
