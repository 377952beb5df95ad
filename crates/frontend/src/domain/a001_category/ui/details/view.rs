use super::model::CategoryForm;
use crate::shared::crud::actions::spawn_submit;
use crate::shared::crud::CrudState;
use crate::shared::data_client::HttpDataClient;
use crate::shared::modal::Modal;
use contracts::domain::a001_category::Category;
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;
use thaw::*;

/// Форма создания/редактирования категории. Показывается, пока открыт редактор.
#[component]
pub fn CategoryDetails(
    state: RwSignal<CrudState<Category>>,
    client: HttpDataClient,
) -> impl IntoView {
    let title = state.with_untracked(|s| {
        s.editor
            .as_ref()
            .map(|e| e.title())
            .unwrap_or_default()
    });

    let field = move |read: fn(&CategoryForm) -> String| {
        move || {
            state.with(|s| {
                s.editor
                    .as_ref()
                    .map(|e| read(&e.form))
                    .unwrap_or_default()
            })
        }
    };
    let edit = move |write: fn(&mut CategoryForm, String), value: String| {
        state.update(|s| {
            if let Some(editor) = s.editor.as_mut() {
                write(&mut editor.form, value);
            }
        });
    };
    let error = move |name: &'static str| {
        move || {
            state.with(|s| s.editor.as_ref().and_then(|e| e.error(name))).map(|msg| {
                view! { <span class="form-error">{msg}</span> }
            })
        }
    };
    let saving = Signal::derive(move || state.with(|s| s.is_saving()));

    let close = Callback::new(move |_| state.update(|s| s.close_editor()));
    let save = move |_| spawn_submit(client.clone(), state);

    view! {
        <Modal title=title on_close=close>
            <div class="details-form">
                {move || {
                    state
                        .with(|s| s.editor.as_ref().and_then(|e| e.submit_error.clone()))
                        .map(|e| view! { <div class="error">{e}</div> })
                }}

                <div class="form-group">
                    <label for="category-name">{"Name"}</label>
                    <input
                        type="text"
                        id="category-name"
                        prop:value=field(|f| f.name.clone())
                        on:input=move |ev| edit(|f, v| f.name = v, event_target_value(&ev))
                        placeholder="Category name"
                    />
                    {error("name")}
                </div>

                <div class="form-group">
                    <label for="category-description">{"Description"}</label>
                    <textarea
                        id="category-description"
                        prop:value=field(|f| f.description.clone())
                        on:input=move |ev| edit(|f, v| f.description = v, event_target_value(&ev))
                        placeholder="Short description"
                    />
                    {error("description")}
                </div>

                <div class="form-group">
                    <label for="category-status">{"Status"}</label>
                    <select
                        id="category-status"
                        prop:value=field(|f| f.status.clone())
                        on:change=move |ev| edit(|f, v| f.status = v, event_target_value(&ev))
                    >
                        <option value="">{"—"}</option>
                        {EntityStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| close.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=saving
                    loading=saving
                >
                    "Save"
                </Button>
            </div>
        </Modal>
    }
}
