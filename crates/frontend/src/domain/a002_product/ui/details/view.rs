use super::model::{load_category_options, ProductForm};
use crate::shared::crud::actions::spawn_submit;
use crate::shared::crud::CrudState;
use crate::shared::data_client::HttpDataClient;
use crate::shared::modal::Modal;
use contracts::domain::a001_category::CategoryRef;
use contracts::domain::a002_product::Product;
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Варианты приходят асинхронно: форма может закрыться раньше,
/// тогда сигнал уже освобождён и значение отбрасывается.
fn store_category_options(target: RwSignal<Vec<CategoryRef>>, options: Vec<CategoryRef>) -> bool {
    target.try_set(options).is_none()
}

#[component]
pub fn ProductDetails(
    state: RwSignal<CrudState<Product>>,
    client: HttpDataClient,
) -> impl IntoView {
    let title = state.with_untracked(|s| {
        s.editor
            .as_ref()
            .map(|e| e.title())
            .unwrap_or_default()
    });

    let categories = RwSignal::new(Vec::<CategoryRef>::new());
    {
        let client = client.clone();
        spawn_local(async move {
            match load_category_options(&client).await {
                Ok(options) => {
                    if !store_category_options(categories, options) {
                        log::debug!("Category options arrived after the form was closed");
                    }
                }
                Err(e) => log::error!("Failed to load category options: {}", e),
            }
        });
    }

    let field = move |read: fn(&ProductForm) -> String| {
        move || {
            state.with(|s| {
                s.editor
                    .as_ref()
                    .map(|e| read(&e.form))
                    .unwrap_or_default()
            })
        }
    };
    let edit = move |write: fn(&mut ProductForm, String), value: String| {
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
                    <label for="product-name">{"Name"}</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value=field(|f| f.name.clone())
                        on:input=move |ev| edit(|f, v| f.name = v, event_target_value(&ev))
                    />
                    {error("name")}
                </div>

                <div class="form-group">
                    <label for="product-description">{"Description"}</label>
                    <textarea
                        id="product-description"
                        prop:value=field(|f| f.description.clone())
                        on:input=move |ev| edit(|f, v| f.description = v, event_target_value(&ev))
                    />
                    {error("description")}
                </div>

                <div class="form-group">
                    <label for="product-status">{"Status"}</label>
                    <select
                        id="product-status"
                        prop:value=field(|f| f.status.clone())
                        on:change=move |ev| edit(|f, v| f.status = v, event_target_value(&ev))
                    >
                        <option value="">{"Select status"}</option>
                        {EntityStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </select>
                    {error("status")}
                </div>

                <div class="form-group">
                    <label for="product-quantity">{"Quantity"}</label>
                    <input
                        type="number"
                        id="product-quantity"
                        min="0"
                        prop:value=field(|f| f.quantity.clone())
                        on:input=move |ev| edit(|f, v| f.quantity = v, event_target_value(&ev))
                    />
                    {error("quantity")}
                </div>

                <div class="form-group">
                    <label for="product-category">{"Category"}</label>
                    <select
                        id="product-category"
                        prop:value=field(|f| f.category_id.clone())
                        on:change=move |ev| edit(|f, v| f.category_id = v, event_target_value(&ev))
                    >
                        <option value="">{"Select category"}</option>
                        <For
                            each=move || categories.get()
                            key=|c| c.id
                            children=move |c: CategoryRef| {
                                let value = c.id.to_string();
                                let current = value.clone();
                                // опции приходят позже, чем выставляется value у select
                                let selected = move || {
                                    state.with(|s| {
                                        s.editor.as_ref().is_some_and(|e| e.form.category_id == current)
                                    })
                                };
                                view! { <option value=value selected=selected>{c.name}</option> }
                            }
                        />
                    </select>
                    {error("category_id")}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_dropped_after_close() {
        let target = RwSignal::new(Vec::<CategoryRef>::new());
        let tools = CategoryRef {
            id: 1,
            name: "Tools".into(),
        };
        assert!(store_category_options(target, vec![tools.clone()]));
        assert_eq!(target.get_untracked(), vec![tools.clone()]);

        target.dispose();
        assert!(!store_category_options(target, vec![tools]));
    }
}
