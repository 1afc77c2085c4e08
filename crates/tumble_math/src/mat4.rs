//! 4x4 Matrix utilities
//!
//! Column-major matrices used both for 3D model/view/projection work and
//! for rotating the tesseract's 4D vertices (a 4D rotation is a rotation
//! in a 2D plane, so the same `plane_rotation` serves both worlds).

use crate::{Vec3, Vec4};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in a 2D plane spanned by two axes.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
///
/// The rotation carries axis `p1` toward axis `p2` for positive angles.
/// In 3D terms, `plane_rotation(a, 1, 2)` is a rotation about X,
/// `plane_rotation(a, 2, 0)` about Y, and `plane_rotation(a, 0, 1)` about Z.
/// `plane_rotation(a, 0, 3)` is the tesseract demo's XW spin.
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Create a rotation matrix from XYZ Euler angles
///
/// Matches the convention the die demo inherits from its scene graph:
/// the Z rotation is applied first, then Y, then X.
pub fn euler_rotation(angles: Vec3) -> Mat4 {
    let rx = plane_rotation(angles.x, 1, 2);
    let ry = plane_rotation(angles.y, 2, 0);
    let rz = plane_rotation(angles.z, 0, 1);
    mul(rx, mul(ry, rz))
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Transform a 3D point by a 4x4 matrix (w = 1 implied, translation applies)
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    transform(m, Vec4::new(p.x, p.y, p.z, 1.0)).xyz()
}
