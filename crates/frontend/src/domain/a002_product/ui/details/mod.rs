mod model;
mod view;

pub use model::{load_category_options, ProductForm};
pub use view::ProductDetails;
