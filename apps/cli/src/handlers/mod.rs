pub mod normalize;
pub mod price;
pub mod translate;
