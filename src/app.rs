//! Application shell: owns the client state and wires store mutations to the
//! rendering layer.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client::DEFAULT_API_BASE;
use crate::catalog::{self, Prompt, PromptFilter};
use crate::components::collections_panel::CollectionsPanel;
use crate::components::filter_bar::FilterBar;
use crate::components::prompt_list::PromptList;
use crate::components::toast::{show_toast, ToastContainer, ToastMessage, ToastType};
use crate::storage;
use crate::storage::collections::Collections;
use crate::storage::favorites::Favorites;

#[component]
pub fn App() -> impl IntoView {
    // Restore persisted state from localStorage
    let initial_filter: PromptFilter =
        LocalStorage::get(storage::STORAGE_FILTER).unwrap_or_default();

    let favorites = RwSignal::new(Favorites::load());
    let collections = RwSignal::new(Collections::load());

    // Listing state
    let prompts = RwSignal::new(Vec::<Prompt>::new());
    let is_loading = RwSignal::new(true);
    let filter = RwSignal::new(initial_filter);
    let favorites_only = RwSignal::new(false);
    let active_collection = RwSignal::new(Option::<String>::None);

    // UI state
    let toasts = RwSignal::new(Vec::<ToastMessage>::new());

    // Fetch the listing once at startup; a failed fetch falls back to the
    // built-in samples inside load_prompts.
    spawn_local(async move {
        let loaded = catalog::load_prompts(DEFAULT_API_BASE).await;
        prompts.set(loaded);
        is_loading.set(false);
    });

    // The rendered listing: catalog filter, then the favorites-only and
    // collection views.
    let visible = Memo::new(move |_| {
        let mut list = catalog::filter_prompts(&prompts.get(), &filter.get());
        if favorites_only.get() {
            favorites.with(|f| list.retain(|p| f.contains(&p.id)));
        }
        if let Some(collection_id) = active_collection.get() {
            collections.with(|c| {
                if let Some(collection) = c.get(&collection_id) {
                    list.retain(|p| collection.prompts.iter().any(|id| id == &p.id));
                }
            });
        }
        list
    });

    let category_options = Memo::new(move |_| catalog::categories(&prompts.get()));

    // Callbacks
    let on_filter_change = Callback::new(move |next: PromptFilter| {
        let _ = LocalStorage::set(storage::STORAGE_FILTER, &next);
        filter.set(next);
    });

    let on_toggle_favorite = Callback::new(move |id: String| {
        favorites.update(|f| {
            f.toggle(&id);
        });
    });

    let on_create_collection = Callback::new(move |(name, description): (String, String)| {
        match collections.try_update(|c| c.create(&name, Some(&description))) {
            Some(Ok(created)) => {
                show_toast(toasts, &format!("Created \"{}\"", created.name), ToastType::Success);
            }
            Some(Err(err)) => show_toast(toasts, &err.to_string(), ToastType::Error),
            None => {}
        }
    });

    let on_delete_collection = Callback::new(move |id: String| {
        active_collection.update(|current| {
            if current.as_deref() == Some(id.as_str()) {
                *current = None;
            }
        });
        collections.update(|c| c.delete(&id));
    });

    let on_add_to_collection =
        Callback::new(move |(collection_id, prompt_id): (String, String)| {
            let outcome = collections.try_update(|c| {
                let name = c.get(&collection_id).map(|col| col.name.clone());
                c.add_prompt(&collection_id, &prompt_id).map(|()| name)
            });
            match outcome {
                Some(Ok(name)) => show_toast(
                    toasts,
                    &format!("Added to \"{}\"", name.unwrap_or_default()),
                    ToastType::Success,
                ),
                Some(Err(err)) => show_toast(toasts, &err.to_string(), ToastType::Error),
                None => {}
            }
        });

    let on_remove_from_collection =
        Callback::new(move |(collection_id, prompt_id): (String, String)| {
            match collections.try_update(|c| c.remove_prompt(&collection_id, &prompt_id)) {
                Some(Ok(())) => show_toast(toasts, "Removed from collection", ToastType::Info),
                Some(Err(err)) => show_toast(toasts, &err.to_string(), ToastType::Error),
                None => {}
            }
        });

    view! {
        <div class="app-container">
            <header class="app-header">
                <div class="logo-section">
                    <h1 class="app-title">"PromptDeck"</h1>
                    <p class="tagline">"Find, favorite, and organize prompts"</p>
                </div>
                <div class="header-actions">
                    <button
                        class="favorites-filter-btn"
                        class:active=move || favorites_only.get()
                        on:click=move |_| favorites_only.update(|v| *v = !*v)
                        title="Show only favorited prompts"
                    >
                        "\u{2665} Favorites"
                        <span class="favorites-count">
                            {move || favorites.with(|f| f.count())}
                        </span>
                    </button>
                    <Show when=move || favorites_only.get() && favorites.with(|f| f.count() > 0)>
                        <button
                            class="clear-favorites-btn"
                            on:click=move |_| favorites.update(|f| f.clear())
                        >
                            "Clear all"
                        </button>
                    </Show>
                </div>
            </header>

            <div class="main-layout">
                <aside class="sidebar">
                    <CollectionsPanel
                        collections=collections
                        active_collection=active_collection
                        on_create=on_create_collection
                        on_delete=on_delete_collection
                    />
                </aside>

                <main class="main-content">
                    <FilterBar
                        filter=filter.into()
                        categories=category_options.into()
                        on_change=on_filter_change
                    />

                    {move || if is_loading.get() {
                        view! {
                            <div class="loading-state">
                                <p>"Loading prompts..."</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <PromptList
                                prompts=visible.into()
                                favorites=favorites
                                collections=collections
                                active_collection=active_collection.into()
                                on_toggle_favorite=on_toggle_favorite
                                on_add_to_collection=on_add_to_collection
                                on_remove_from_collection=on_remove_from_collection
                            />
                        }
                        .into_any()
                    }}
                </main>
            </div>

            <ToastContainer
                toasts=toasts.into()
                on_dismiss=Callback::new(move |id: usize| {
                    toasts.update(|t| t.retain(|m| m.id != id));
                })
            />
        </div>
    }
}
