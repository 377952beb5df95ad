pub mod login;
pub mod placeholder;
