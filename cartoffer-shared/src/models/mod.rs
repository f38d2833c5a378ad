pub mod cart;
pub mod offer;
pub mod segment;
