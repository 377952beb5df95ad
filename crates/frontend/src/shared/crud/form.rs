use contracts::domain::common::FieldErrors;

use super::CrudEntity;

/// Результат отправки формы: что именно уйдёт на сервер
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<P> {
    Insert(P),
    Update { id: i64, payload: P },
}

impl<P> Mutation<P> {
    pub fn success_text(&self, label: &str) -> String {
        match self {
            Mutation::Insert(_) => format!("{} added successfully!", label),
            Mutation::Update { .. } => format!("{} updated successfully!", label),
        }
    }
}

/// Открытая форма создания/редактирования.
///
/// Редактор владеет выбранной записью: закрытие формы (drop) сбрасывает выбор.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor<E: CrudEntity> {
    pub selected: Option<i64>,
    pub form: E::Form,
    pub errors: FieldErrors,
    pub submit_error: Option<String>,
    pub saving: bool,
}

impl<E: CrudEntity> Editor<E> {
    pub fn create() -> Self {
        Self {
            selected: None,
            form: E::Form::default(),
            errors: FieldErrors::new(),
            submit_error: None,
            saving: false,
        }
    }

    pub fn edit(entity: &E) -> Self {
        Self {
            selected: Some(entity.id()),
            form: entity.to_form(),
            ..Self::create()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.selected.is_some()
    }

    pub fn title(&self) -> String {
        if self.is_edit() {
            format!("Edit {}", E::LABEL)
        } else {
            format!("Add {}", E::LABEL)
        }
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    /// Проверяет форму и переводит редактор в состояние сохранения.
    ///
    /// `None`, если форма невалидна (ошибки полей заполнены) или сохранение уже идёт.
    pub fn prepare_submit(&mut self) -> Option<Mutation<E::Payload>> {
        if self.saving {
            return None;
        }
        match E::parse_form(&self.form) {
            Err(errors) => {
                self.errors = errors;
                None
            }
            Ok(payload) => {
                self.errors = FieldErrors::new();
                self.submit_error = None;
                self.saving = true;
                Some(match self.selected {
                    Some(id) => Mutation::Update { id, payload },
                    None => Mutation::Insert(payload),
                })
            }
        }
    }

    /// Сервер отказал: форма остаётся открытой с текстом ошибки
    pub fn fail(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.submit_error = Some(message.into());
    }
}
