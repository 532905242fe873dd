//! The prompt listing: one card per prompt, or a "no results" placeholder.

use leptos::prelude::*;

use crate::catalog::Prompt;
use crate::components::prompt_card::PromptCard;
use crate::storage::collections::Collections;
use crate::storage::favorites::Favorites;

#[component]
pub fn PromptList(
    prompts: Signal<Vec<Prompt>>,
    favorites: RwSignal<Favorites>,
    collections: RwSignal<Collections>,
    active_collection: Signal<Option<String>>,
    #[prop(into)] on_toggle_favorite: Callback<String>,
    #[prop(into)] on_add_to_collection: Callback<(String, String)>,
    #[prop(into)] on_remove_from_collection: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="prompt-grid">
            {move || {
                let list = prompts.get();
                if list.is_empty() {
                    view! {
                        <div class="no-results">
                            <h3>"No prompts found"</h3>
                            <p>"Try adjusting your search or filters."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    list.into_iter()
                        .map(|prompt| {
                            view! {
                                <PromptCard
                                    prompt=Some(prompt)
                                    favorites=favorites
                                    collections=collections
                                    active_collection=active_collection
                                    on_toggle_favorite=on_toggle_favorite
                                    on_add_to_collection=on_add_to_collection
                                    on_remove_from_collection=on_remove_from_collection
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
