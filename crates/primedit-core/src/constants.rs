//! Global constants for primedit-core

/// Smallest size any scale component may take after an edit
pub const MIN_SCALE: f32 = 0.05;

/// Fraction of a scale change applied to the position during handle edits
/// (half the change, so the opposite face stays put)
pub const ANCHOR_TRANSLATE_FACTOR: f32 = 0.5;

/// Default scale for newly created prims
pub const DEFAULT_PRIM_SCALE: [f32; 3] = [1.0, 1.0, 1.0];

/// Default vertical field of view for [`crate::PerspectiveProjection`], in degrees
pub const DEFAULT_FOV_DEGREES: f32 = 40.0;

/// Default viewport size in pixels
pub const DEFAULT_VIEWPORT: [f32; 2] = [800.0, 600.0];
