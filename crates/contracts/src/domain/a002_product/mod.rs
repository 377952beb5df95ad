pub mod aggregate;

pub use aggregate::{Product, ProductDraft, ProductPatch};
