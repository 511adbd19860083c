pub mod normalize;
pub mod validation;
