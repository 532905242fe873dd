//! A single prompt card: title, star strip, badges, body preview, and the
//! per-prompt actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::catalog::{self, Prompt};
use crate::storage::collections::Collections;
use crate::storage::favorites::Favorites;

const PREVIEW_CHARS: usize = 160;

#[component]
pub fn PromptCard(
    /// The prompt to render. `None` renders an empty placeholder card.
    prompt: Option<Prompt>,
    favorites: RwSignal<Favorites>,
    collections: RwSignal<Collections>,
    active_collection: Signal<Option<String>>,
    #[prop(into)] on_toggle_favorite: Callback<String>,
    #[prop(into)] on_add_to_collection: Callback<(String, String)>,
    #[prop(into)] on_remove_from_collection: Callback<(String, String)>,
) -> impl IntoView {
    let Some(prompt) = prompt else {
        return view! { <div class="prompt-card prompt-card-empty"></div> }.into_any();
    };

    let id_for_class = prompt.id.clone();
    let id_for_glyph = prompt.id.clone();
    let id_for_toggle = prompt.id.clone();
    let id_for_add = prompt.id.clone();
    let id_for_remove = prompt.id.clone();

    let rating_label = format!("{:.1} ({} ratings)", prompt.rating, prompt.rating_count);
    let description_html =
        catalog::render_multiline(&catalog::preview(&prompt.description, PREVIEW_CHARS));

    // Copy the prompt body, flipping the button label while the copy is
    // fresh.
    let copied = RwSignal::new(false);
    let content_for_copy = prompt.content.clone();
    let copy_prompt = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(&content_for_copy);
        }
        copied.set(true);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(1500).await;
            copied.set(false);
        });
    };

    let on_collection_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select: web_sys::HtmlSelectElement = target.unchecked_into();
        let collection_id = select.value();
        if !collection_id.is_empty() {
            on_add_to_collection.run((collection_id, id_for_add.clone()));
        }
        select.set_value(""); // Reset to placeholder
    };

    view! {
        <div class="prompt-card">
            <div class="prompt-card-header">
                <h3 class="prompt-title">{prompt.title.clone()}</h3>
                <button
                    class="favorite-btn"
                    class:favorited=move || favorites.with(|f| f.contains(&id_for_class))
                    data-prompt-id=prompt.id.clone()
                    on:click=move |_| on_toggle_favorite.run(id_for_toggle.clone())
                    title="Toggle favorite"
                >
                    {move || if favorites.with(|f| f.contains(&id_for_glyph)) { "\u{2665}" } else { "\u{2661}" }}
                </button>
            </div>

            <div class="prompt-meta">
                <span class="prompt-stars" title=rating_label>
                    {catalog::generate_stars(prompt.rating)}
                </span>
                {(!prompt.category.is_empty()).then(|| view! {
                    <span class="badge badge-category">{prompt.category.clone()}</span>
                })}
                {(!prompt.difficulty.is_empty()).then(|| view! {
                    <span class="badge badge-difficulty">{prompt.difficulty.clone()}</span>
                })}
                {prompt.featured.then(|| view! {
                    <span class="badge badge-featured">"Featured"</span>
                })}
            </div>

            <p class="prompt-description" inner_html=description_html></p>

            {(!prompt.tags.is_empty()).then(|| view! {
                <div class="prompt-tags">
                    {prompt.tags.iter().map(|tag| view! {
                        <span class="tag">{tag.clone()}</span>
                    }).collect_view()}
                </div>
            })}

            <div class="prompt-card-footer">
                <span class="prompt-author">{prompt.author.clone()}</span>
                <div class="prompt-actions">
                    <button class="card-btn copy-btn" on:click=copy_prompt title="Copy prompt text">
                        {move || if copied.get() { "Copied" } else { "Copy" }}
                    </button>
                    {move || active_collection.get().map(|collection_id| {
                        let prompt_id = id_for_remove.clone();
                        view! {
                            <button
                                class="card-btn remove-btn"
                                on:click=move |_| {
                                    on_remove_from_collection.run((collection_id.clone(), prompt_id.clone()))
                                }
                                title="Remove from this collection"
                            >
                                "Remove"
                            </button>
                        }
                    })}
                    <select class="collection-select" on:change=on_collection_change>
                        <option value="" disabled=true selected=true>"Add to collection..."</option>
                        {move || collections.with(|c| {
                            c.all()
                                .iter()
                                .map(|col| (col.id.clone(), col.name.clone()))
                                .collect::<Vec<_>>()
                        }).into_iter().map(|(id, name)| view! {
                            <option value=id>{name}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
    .into_any()
}
