//! Общая механика CRUD-экранов: состояние списка, редактор, подтверждение удаления
//! и асинхронные сценарии поверх `DataClient`.

pub mod actions;
pub mod controller;
pub mod delete_gate;
pub mod entity;
pub mod form;
pub mod notice;
pub mod state;
pub mod table_view;

pub use delete_gate::DeleteGate;
pub use entity::CrudEntity;
pub use form::{Editor, Mutation};
pub use notice::{Notice, NoticeKind};
pub use state::{CrudState, StateCell};
pub use table_view::{TableView, PAGE_SIZE};
