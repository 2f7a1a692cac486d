mod conversion;
mod cylindrical;
mod equality;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{
    from_24bit, lab_to_lch, linear_rgb_to_xyz, oklab_to_oklch, rgb_to_linear_rgb, xyz_to_lab,
    xyz_to_oklab,
};

// cylindrical
pub(crate) use cylindrical::{rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_within, TOLERANCE};
pub use equality::to_eq_bits;

// math
pub(crate) use math::round_half_up;

// space
pub use space::{Model, ModelIterator};

// string
pub(crate) use string::parse;
