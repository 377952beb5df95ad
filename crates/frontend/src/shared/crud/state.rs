use std::cell::RefCell;

use leptos::prelude::*;

use super::{CrudEntity, DeleteGate, Editor, Notice, NoticeKind, TableView};
use crate::shared::data_client::ClientError;

/// Состояние одного CRUD-экрана. Создаётся страницей, не глобальное.
#[derive(Debug, Clone, PartialEq)]
pub struct CrudState<E: CrudEntity> {
    pub rows: Vec<E>,
    pub loading: bool,
    pub load_error: Option<String>,
    pub editor: Option<Editor<E>>,
    pub gate: DeleteGate,
    pub notice: Option<Notice>,
    pub view: TableView,
    notice_seq: u64,
}

impl<E: CrudEntity> Default for CrudState<E> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            load_error: None,
            editor: None,
            gate: DeleteGate::Idle,
            notice: None,
            view: TableView::default(),
            notice_seq: 0,
        }
    }
}

impl<E: CrudEntity> CrudState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, id: i64) -> Option<&E> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Ошибка чтения оставляет список пустым и показывает предупреждение
    pub fn finish_load(&mut self, result: Result<Vec<E>, ClientError>) {
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.load_error = None;
            }
            Err(e) => {
                self.rows.clear();
                self.load_error = Some(e.to_string());
            }
        }
    }

    pub fn open_create(&mut self) {
        self.editor = Some(Editor::create());
    }

    pub fn open_edit(&mut self, id: i64) -> bool {
        match self.row(id).map(Editor::edit) {
            Some(editor) => {
                self.editor = Some(editor);
                true
            }
            None => false,
        }
    }

    /// Cancel, клик по подложке, Escape
    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn is_saving(&self) -> bool {
        self.editor.as_ref().is_some_and(|e| e.saving)
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            seq: self.notice_seq,
            kind,
            text: text.into(),
        });
        self.notice_seq
    }

    /// Скрывает уведомление, только если это всё ещё то же самое уведомление
    pub fn dismiss_notice(&mut self, seq: u64) -> bool {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
            true
        } else {
            false
        }
    }
}

/// Доступ к состоянию экрана: сигнал в браузере, `RefCell` в тестах
pub trait StateCell {
    type Entity: CrudEntity;

    /// `None`, если состояние уже уничтожено (страница закрыта)
    fn with_state<R>(&self, f: impl FnOnce(&mut CrudState<Self::Entity>) -> R) -> Option<R>;
}

impl<E: CrudEntity> StateCell for RwSignal<CrudState<E>> {
    type Entity = E;

    fn with_state<R>(&self, f: impl FnOnce(&mut CrudState<E>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<E: CrudEntity> StateCell for RefCell<CrudState<E>> {
    type Entity = E;

    fn with_state<R>(&self, f: impl FnOnce(&mut CrudState<E>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
