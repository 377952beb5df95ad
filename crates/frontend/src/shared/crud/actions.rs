//! Запуск сценариев контроллера из обработчиков событий страницы

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::notice::NOTICE_TIMEOUT_MS;
use super::{controller, CrudEntity, CrudState, StateCell};
use crate::shared::data_client::HttpDataClient;

/// Клиент данных из контекста приложения (см. `App`)
pub fn use_data_client() -> HttpDataClient {
    use_context::<HttpDataClient>().unwrap_or_default()
}

pub fn spawn_reload<E: CrudEntity>(client: HttpDataClient, state: RwSignal<CrudState<E>>) {
    spawn_local(async move {
        controller::reload(&client, &state).await;
    });
}

pub fn spawn_submit<E: CrudEntity>(client: HttpDataClient, state: RwSignal<CrudState<E>>) {
    spawn_local(async move {
        if let Some(seq) = controller::submit(&client, &state).await {
            dismiss_later(state, seq);
        }
    });
}

pub fn spawn_confirm_delete<E: CrudEntity>(client: HttpDataClient, state: RwSignal<CrudState<E>>) {
    spawn_local(async move {
        if let Some(seq) = controller::confirm_delete(&client, &state).await {
            dismiss_later(state, seq);
        }
    });
}

fn dismiss_later<E: CrudEntity>(state: RwSignal<CrudState<E>>, seq: u64) {
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        state.with_state(|s| s.dismiss_notice(seq));
    });
}
