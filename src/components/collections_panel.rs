//! Sidebar panel for creating, selecting, and deleting collections.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::storage::collections::Collections;

#[component]
pub fn CollectionsPanel(
    collections: RwSignal<Collections>,
    active_collection: RwSignal<Option<String>>,
    #[prop(into)] on_create: Callback<(String, String)>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let show_create_input = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    // Name validation lives in the store; a rejected create surfaces as a
    // toast and the form stays open.
    let submit = move || {
        on_create.run((name.get_untracked(), description.get_untracked()));
        name.set(String::new());
        description.set(String::new());
        show_create_input.set(false);
    };

    let handle_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        } else if ev.key() == "Escape" {
            show_create_input.set(false);
            name.set(String::new());
            description.set(String::new());
        }
    };

    view! {
        <div class="collections-section">
            <div class="collections-header">
                <h3 class="section-title">"Collections"</h3>
                <button
                    class="new-collection-btn"
                    on:click=move |_| show_create_input.update(|v| *v = !*v)
                    title="Create a collection"
                >
                    "New"
                </button>
            </div>

            <Show when=move || show_create_input.get()>
                <div class="create-collection-form">
                    <input
                        type="text"
                        placeholder="Collection name..."
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input: web_sys::HtmlInputElement = target.unchecked_into();
                            name.set(input.value());
                        }
                        on:keydown=handle_keydown
                    />
                    <input
                        type="text"
                        placeholder="Description (optional)"
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input: web_sys::HtmlInputElement = target.unchecked_into();
                            description.set(input.value());
                        }
                        on:keydown=handle_keydown
                    />
                    <button class="confirm-btn" on:click=move |_| submit()>"Create"</button>
                </div>
            </Show>

            <div class="collections-list">
                {move || {
                    let items = collections.with(|c| c.all().to_vec());
                    if items.is_empty() {
                        view! { <p class="collections-empty">"No collections yet"</p> }.into_any()
                    } else {
                        items.into_iter().map(|collection| {
                            let id_for_select = collection.id.clone();
                            let id_for_class = collection.id.clone();
                            let id_for_delete = collection.id.clone();
                            let prompt_count = collection.prompts.len();

                            view! {
                                <div
                                    class="collection-item"
                                    class:active=move || {
                                        active_collection.get().as_deref() == Some(id_for_class.as_str())
                                    }
                                    title=collection.description.clone()
                                    on:click=move |_| {
                                        let id = id_for_select.clone();
                                        active_collection.update(|current| {
                                            *current = if current.as_deref() == Some(id.as_str()) {
                                                None
                                            } else {
                                                Some(id)
                                            };
                                        });
                                    }
                                >
                                    <span class="collection-name">{collection.name.clone()}</span>
                                    <span class="collection-count">{prompt_count}</span>
                                    <button
                                        class="collection-delete-btn"
                                        on:click=move |ev: web_sys::MouseEvent| {
                                            ev.stop_propagation();
                                            on_delete.run(id_for_delete.clone());
                                        }
                                        title="Delete collection"
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}
