//! Picking ray and axis-aligned box intersection

use crate::Vec3;

/// A 3D axis-aligned bounding box
#[derive(Clone, Copy, Debug)]
pub struct Aabb3 {
    /// Minimum corner (all components are minimums)
    pub min: Vec3,
    /// Maximum corner (all components are maximums)
    pub max: Vec3,
}

impl Aabb3 {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extent on every axis
    pub fn from_center_half_size(center: Vec3, half_size: f32) -> Self {
        let h = Vec3::new(half_size, half_size, half_size);
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point is inside or on the AABB
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// A ray with an origin and a unit direction
#[derive(Clone, Copy, Debug)]
pub struct Ray3 {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray3 {
    /// Create a new ray; the direction is normalized automatically
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Point along the ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab-test intersection against an AABB
    ///
    /// Returns the entry distance along the ray, or `None` when the ray
    /// misses the box or the box lies entirely behind the origin. An origin
    /// inside the box reports a hit at distance 0.
    pub fn intersect_aabb(&self, aabb: &Aabb3) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let (origin, dir, min, max) = match axis {
                0 => (self.origin.x, self.direction.x, aabb.min.x, aabb.max.x),
                1 => (self.origin.y, self.direction.y, aabb.min.y, aabb.max.y),
                _ => (self.origin.z, self.direction.z, aabb.min.z, aabb.max.z),
            };

            if dir.abs() < 1e-8 {
                // Parallel to this slab; miss unless the origin is inside it
                if origin < min || origin > max {
                    return None;
                }
            } else {
                let inv = 1.0 / dir;
                let mut t0 = (min - origin) * inv;
                let mut t1 = (max - origin) * inv;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                t_min = t_min.max(t0);
                t_max = t_max.min(t1);
                if t_min > t_max {
                    return None;
                }
            }
        }

        if t_max < 0.0 {
            // Box entirely behind the ray
            return None;
        }

        Some(t_min.max(0.0))
    }
}
