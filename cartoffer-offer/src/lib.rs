pub mod registry;
pub mod rules;
pub mod resolver;

pub use registry::OfferRegistry;
pub use resolver::OfferResolver;
