//! Общие типы данных для frontend и backend BCRM.
//!
//! - `domain`: сущности (категории, товары) и их формы
//! - `shared`: формат ошибок API

pub mod domain;
pub mod shared;
