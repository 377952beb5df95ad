//! Category form: `model.rs` maps the record to form fields, `view.rs` renders it

mod model;
mod view;

pub use model::CategoryForm;
pub use view::CategoryDetails;
