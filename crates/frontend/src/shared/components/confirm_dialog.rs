use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Диалог подтверждения удаления (Keep / Delete)
#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: String,
    /// Запрос удаления уже отправлен
    #[prop(into)]
    busy: Signal<bool>,
    on_keep: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Confirm".to_string() on_close=on_keep>
            <p class="confirm-dialog__message">{message}</p>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_keep.run(())
                    disabled=busy
                >
                    "Keep"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                    disabled=busy
                    loading=busy
                >
                    "Delete"
                </Button>
            </div>
        </Modal>
    }
}
