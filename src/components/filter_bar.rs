//! Listing filter controls: search, category, difficulty, featured, sort.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::{PromptFilter, SortOrder};

const DIFFICULTIES: [&str; 3] = ["beginner", "intermediate", "advanced"];

#[component]
pub fn FilterBar(
    filter: Signal<PromptFilter>,
    categories: Signal<Vec<String>>,
    #[prop(into)] on_change: Callback<PromptFilter>,
) -> impl IntoView {
    let on_query_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        let value = input.value();
        let mut next = filter.get_untracked();
        next.query = if value.trim().is_empty() { None } else { Some(value) };
        on_change.run(next);
    };

    let on_category_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select: web_sys::HtmlSelectElement = target.unchecked_into();
        let value = select.value();
        let mut next = filter.get_untracked();
        next.category = if value.is_empty() { None } else { Some(value) };
        on_change.run(next);
    };

    let on_difficulty_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select: web_sys::HtmlSelectElement = target.unchecked_into();
        let value = select.value();
        let mut next = filter.get_untracked();
        next.difficulty = if value.is_empty() { None } else { Some(value) };
        on_change.run(next);
    };

    let on_featured_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        let mut next = filter.get_untracked();
        next.featured = if input.checked() { Some(true) } else { None };
        on_change.run(next);
    };

    let on_sort_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select: web_sys::HtmlSelectElement = target.unchecked_into();
        let mut next = filter.get_untracked();
        next.sort = if select.value() == "rating" {
            Some(SortOrder::Rating)
        } else {
            None
        };
        on_change.run(next);
    };

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="filter-search"
                placeholder="Search prompts..."
                prop:value=move || filter.get().query.unwrap_or_default()
                on:input=on_query_input
            />

            <select
                class="filter-select"
                prop:value=move || filter.get().category.unwrap_or_default()
                on:change=on_category_change
            >
                <option value="">"All categories"</option>
                {move || categories.get().into_iter().map(|category| view! {
                    <option value=category.clone()>{category.clone()}</option>
                }).collect_view()}
            </select>

            <select
                class="filter-select"
                prop:value=move || filter.get().difficulty.unwrap_or_default()
                on:change=on_difficulty_change
            >
                <option value="">"All difficulties"</option>
                {DIFFICULTIES.into_iter().map(|difficulty| view! {
                    <option value=difficulty>{difficulty}</option>
                }).collect_view()}
            </select>

            <label class="filter-featured">
                <input
                    type="checkbox"
                    prop:checked=move || filter.get().featured.unwrap_or(false)
                    on:change=on_featured_change
                />
                "Featured only"
            </label>

            <select
                class="filter-select"
                prop:value=move || match filter.get().sort {
                    Some(SortOrder::Rating) => "rating".to_string(),
                    None => String::new(),
                }
                on:change=on_sort_change
            >
                <option value="">"Default order"</option>
                <option value="rating">"Top rated"</option>
            </select>
        </div>
    }
}
