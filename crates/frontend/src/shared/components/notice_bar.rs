use crate::shared::crud::{Notice, NoticeKind};
use leptos::prelude::*;
use thaw::*;

/// Транзиентное уведомление над таблицей
#[component]
pub fn NoticeBar(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let intent = match n.kind {
                NoticeKind::Success => MessageBarIntent::Success,
                NoticeKind::Error => MessageBarIntent::Error,
            };
            view! {
                <div class="notice">
                    <MessageBar intent=intent>
                        {n.text}
                    </MessageBar>
                </div>
            }
        })
    }
}
