pub mod contrast;
pub mod enhancer;
pub mod hsv;
pub mod params;
pub mod saturation;
pub mod sharpness;
pub mod unsharp_mask;
