//! Асинхронные сценарии CRUD-экрана. Каждый сценарий целиком выполняется
//! внутри одной задачи `spawn_local`; состояние меняется только через `StateCell`.

use super::{CrudEntity, Mutation, NoticeKind, StateCell};
use crate::shared::data_client::DataClient;

/// Полная перечитка таблицы
pub async fn reload<E, C, S>(client: &C, cell: &S)
where
    E: CrudEntity,
    C: DataClient,
    S: StateCell<Entity = E>,
{
    if cell.with_state(|s| s.begin_load()).is_none() {
        return;
    }
    let result = client.select::<E>(E::TABLE, &E::select_query()).await;
    if let Err(e) = &result {
        log::error!("Failed to load {}: {}", E::TABLE, e);
    }
    cell.with_state(|s| s.finish_load(result));
}

/// Отправка открытой формы.
///
/// Возвращает `seq` показанного уведомления (для таймера скрытия) при успехе.
pub async fn submit<E, C, S>(client: &C, cell: &S) -> Option<u64>
where
    E: CrudEntity,
    C: DataClient,
    S: StateCell<Entity = E>,
{
    let mutation = cell
        .with_state(|s| s.editor.as_mut().and_then(|editor| editor.prepare_submit()))
        .flatten()?;

    let result = match &mutation {
        Mutation::Insert(payload) => {
            client.insert(E::TABLE, std::slice::from_ref(payload)).await
        }
        Mutation::Update { id, payload } => client.update(E::TABLE, *id, payload).await,
    };

    match result {
        Ok(()) => {
            let seq = cell.with_state(|s| {
                s.close_editor();
                s.notify(NoticeKind::Success, mutation.success_text(E::LABEL))
            });
            reload(client, cell).await;
            seq
        }
        Err(e) => {
            log::error!("Failed to save {}: {}", E::TABLE, e);
            cell.with_state(|s| {
                if let Some(editor) = s.editor.as_mut() {
                    editor.fail(e.to_string());
                }
            });
            None
        }
    }
}

/// Удаление подтверждённой записи. Любой исход возвращает gate в `Idle`.
pub async fn confirm_delete<E, C, S>(client: &C, cell: &S) -> Option<u64>
where
    E: CrudEntity,
    C: DataClient,
    S: StateCell<Entity = E>,
{
    let id = cell.with_state(|s| s.gate.confirm()).flatten()?;

    let result = client.delete(E::TABLE, id).await;
    let deleted = result.is_ok();
    if let Err(e) = &result {
        log::error!("Failed to delete {} {}: {}", E::TABLE, id, e);
    }

    let seq = cell.with_state(|s| {
        s.gate.finish();
        if deleted {
            s.notify(
                NoticeKind::Success,
                format!("{} Deleted successfully!", E::LABEL),
            )
        } else {
            s.notify(
                NoticeKind::Error,
                format!("Error deleting {}", E::LABEL.to_lowercase()),
            )
        }
    });
    if deleted {
        reload(client, cell).await;
    }
    seq
}
