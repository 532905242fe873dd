//! The prompt catalog: the listing record, the built-in sample data, and the
//! pure filtering/rendering helpers the listing view is built from.

use std::cmp::Ordering;

use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::api::client::fetch_prompts;

/// A published prompt as served by the listing endpoint.
///
/// Every field carries a default so partially-populated records render as
/// empty text instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    pub description: String,
    pub category: String,
    pub author: String,
    pub rating: f32,
    pub rating_count: u32,
    pub featured: bool,
    pub difficulty: String,
    pub tags: Vec<String>,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            content: String::new(),
            description: String::new(),
            category: String::new(),
            author: String::new(),
            rating: 0.0,
            rating_count: 0,
            featured: false,
            difficulty: String::new(),
            tags: Vec::new(),
        }
    }
}

/// Listing filter. Unset criteria match everything; set criteria apply
/// conjunctively before the sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub difficulty: Option<String>,
    pub query: Option<String>,
    pub sort: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Non-increasing by average rating.
    Rating,
}

/// Fetch the public prompt listing, falling back to the built-in samples on
/// any failure. Never fails outward.
pub async fn load_prompts(base_url: &str) -> Vec<Prompt> {
    match fetch_prompts(base_url).await {
        Ok(prompts) => prompts,
        Err(err) => {
            logging::error!("catalog: using sample prompts, listing fetch failed: {}", err);
            sample_prompts()
        }
    }
}

/// Apply `filter` over `prompts`, preserving relative order except for an
/// explicit sort.
pub fn filter_prompts(prompts: &[Prompt], filter: &PromptFilter) -> Vec<Prompt> {
    let mut matched: Vec<Prompt> = prompts
        .iter()
        .filter(|p| {
            filter.category.as_ref().map_or(true, |c| &p.category == c)
                && filter.featured.map_or(true, |f| p.featured == f)
                && filter.difficulty.as_ref().map_or(true, |d| &p.difficulty == d)
                && filter.query.as_ref().map_or(true, |q| matches_query(p, q))
        })
        .cloned()
        .collect();

    if let Some(SortOrder::Rating) = filter.sort {
        matched.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    }
    matched
}

/// Case-insensitive substring match against title and description.
fn matches_query(prompt: &Prompt, query: &str) -> bool {
    let query = query.to_lowercase();
    prompt.title.to_lowercase().contains(&query)
        || prompt.description.to_lowercase().contains(&query)
}

/// Categories present in `prompts`, first-seen order, deduplicated.
pub fn categories(prompts: &[Prompt]) -> Vec<String> {
    let mut seen = Vec::new();
    for prompt in prompts {
        if !prompt.category.is_empty() && !seen.contains(&prompt.category) {
            seen.push(prompt.category.clone());
        }
    }
    seen
}

/// Render the 0-5 rating as a star strip.
///
/// Whole ratings render five glyphs; fractional ratings render four (floor
/// filled, remainder empty). Consumers key off this shape.
pub fn generate_stars(rating: f32) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let filled = rating.floor() as usize;
    let empty = if rating == rating.floor() {
        5 - filled
    } else {
        4 - filled
    };
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(empty));
    stars
}

/// Truncate `text` to `max_chars` characters, appending an ellipsis when
/// anything was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

/// Escape HTML-significant characters so prompt-supplied text can never be
/// interpreted as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape `text` and convert newlines to `<br>` for multiline card bodies.
pub fn render_multiline(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// Built-in listing used when the prompt endpoint is unreachable.
pub fn sample_prompts() -> Vec<Prompt> {
    vec![
        Prompt {
            id: "sample-1".to_string(),
            title: "AI Code Review Assistant".to_string(),
            content: "Review the following code for bugs, style issues, and missing edge \
                      cases. For each finding, quote the relevant lines and suggest a fix:\n\
                      \n{{code}}"
                .to_string(),
            description: "Turns the model into a thorough code reviewer that quotes the lines \
                          it comments on."
                .to_string(),
            category: "development".to_string(),
            author: "PromptDeck".to_string(),
            rating: 4.8,
            rating_count: 124,
            featured: true,
            difficulty: "intermediate".to_string(),
            tags: vec!["code".to_string(), "review".to_string()],
        },
        Prompt {
            id: "sample-2".to_string(),
            title: "Blog Post Outline Generator".to_string(),
            content: "Draft an outline for a blog post about {{topic}}. Include a hook, three \
                      to five sections with bullet points, and a closing call to action."
                .to_string(),
            description: "Structured outlines for long-form writing, from hook to call to \
                          action."
                .to_string(),
            category: "writing".to_string(),
            author: "PromptDeck".to_string(),
            rating: 4.5,
            rating_count: 87,
            featured: false,
            difficulty: "beginner".to_string(),
            tags: vec!["writing".to_string(), "blogging".to_string()],
        },
        Prompt {
            id: "sample-3".to_string(),
            title: "SQL Query Optimizer".to_string(),
            content: "Analyze this SQL query and its schema. Explain what limits its \
                      performance and rewrite it with the appropriate indexes or joins:\n\
                      \n{{query}}"
                .to_string(),
            description: "Explains why a query is slow before rewriting it.".to_string(),
            category: "development".to_string(),
            author: "PromptDeck".to_string(),
            rating: 4.6,
            rating_count: 59,
            featured: true,
            difficulty: "advanced".to_string(),
            tags: vec!["sql".to_string(), "databases".to_string()],
        },
        Prompt {
            id: "sample-4".to_string(),
            title: "Marketing Email Writer".to_string(),
            content: "Write a marketing email announcing {{product}}. Keep it under 150 \
                      words, lead with the customer benefit, and end with one clear call to \
                      action."
                .to_string(),
            description: "Short, benefit-first announcement emails with a single call to \
                          action."
                .to_string(),
            category: "marketing".to_string(),
            author: "PromptDeck".to_string(),
            rating: 4.2,
            rating_count: 143,
            featured: false,
            difficulty: "beginner".to_string(),
            tags: vec!["email".to_string(), "marketing".to_string()],
        },
        Prompt {
            id: "sample-5".to_string(),
            title: "Interview Question Generator".to_string(),
            content: "Generate ten interview questions for a {{role}} position: four \
                      technical, four behavioral, two situational. Note what a strong answer \
                      covers for each."
                .to_string(),
            description: "Balanced interview kits with guidance on what good answers look \
                          like."
                .to_string(),
            category: "business".to_string(),
            author: "PromptDeck".to_string(),
            rating: 4.4,
            rating_count: 71,
            featured: false,
            difficulty: "intermediate".to_string(),
            tags: vec!["hiring".to_string(), "interviews".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_prompts() -> Vec<Prompt> {
        vec![
            Prompt {
                id: "p1".to_string(),
                title: "Refactoring Coach".to_string(),
                description: "Guides structured refactoring sessions".to_string(),
                category: "development".to_string(),
                difficulty: "advanced".to_string(),
                rating: 3.9,
                featured: true,
                ..Prompt::default()
            },
            Prompt {
                id: "p2".to_string(),
                title: "Haiku Writer".to_string(),
                description: "Seasonal haiku on any subject".to_string(),
                category: "writing".to_string(),
                difficulty: "beginner".to_string(),
                rating: 4.7,
                ..Prompt::default()
            },
            Prompt {
                id: "p3".to_string(),
                title: "Bug Triage Helper".to_string(),
                description: "Sorts crash reports by severity".to_string(),
                category: "development".to_string(),
                difficulty: "beginner".to_string(),
                rating: 4.2,
                ..Prompt::default()
            },
        ]
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let result = filter_prompts(
            &mixed_prompts(),
            &PromptFilter {
                category: Some("development".to_string()),
                ..PromptFilter::default()
            },
        );
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p3"]);
    }

    #[test]
    fn test_filter_by_featured() {
        let result = filter_prompts(
            &mixed_prompts(),
            &PromptFilter {
                featured: Some(true),
                ..PromptFilter::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p1");
    }

    #[test]
    fn test_filter_by_difficulty() {
        let result = filter_prompts(
            &mixed_prompts(),
            &PromptFilter {
                difficulty: Some("beginner".to_string()),
                ..PromptFilter::default()
            },
        );
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2", "p3"]);
    }

    #[test]
    fn test_query_matches_title_or_description_case_insensitive() {
        let prompts = mixed_prompts();
        let by_title = filter_prompts(
            &prompts,
            &PromptFilter {
                query: Some("HAIKU".to_string()),
                ..PromptFilter::default()
            },
        );
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "p2");

        let by_description = filter_prompts(
            &prompts,
            &PromptFilter {
                query: Some("crash reports".to_string()),
                ..PromptFilter::default()
            },
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "p3");
    }

    #[test]
    fn test_criteria_combine_conjunctively() {
        let result = filter_prompts(
            &mixed_prompts(),
            &PromptFilter {
                category: Some("development".to_string()),
                difficulty: Some("beginner".to_string()),
                ..PromptFilter::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p3");
    }

    #[test]
    fn test_sort_by_rating_is_non_increasing() {
        let result = filter_prompts(
            &mixed_prompts(),
            &PromptFilter {
                sort: Some(SortOrder::Rating),
                ..PromptFilter::default()
            },
        );
        let ratings: Vec<f32> = result.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, [4.7, 4.2, 3.9]);
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let prompts = mixed_prompts();
        let result = filter_prompts(&prompts, &PromptFilter::default());
        assert_eq!(result, prompts);
    }

    #[test]
    fn test_categories_deduplicated_in_first_seen_order() {
        assert_eq!(categories(&mixed_prompts()), ["development", "writing"]);
    }

    #[test]
    fn test_generate_stars_whole_ratings() {
        assert_eq!(generate_stars(5.0), "★★★★★");
        assert_eq!(generate_stars(4.0), "★★★★☆");
        assert_eq!(generate_stars(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_generate_stars_fractional_ratings_render_four_glyphs() {
        assert_eq!(generate_stars(3.5), "★★★☆");
        assert_eq!(generate_stars(4.8), "★★★★");
        assert_eq!(generate_stars(0.5), "☆☆☆☆");
    }

    #[test]
    fn test_generate_stars_clamps_out_of_range() {
        assert_eq!(generate_stars(7.0), "★★★★★");
        assert_eq!(generate_stars(-1.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_sample_prompts_shape() {
        let samples = sample_prompts();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].title, "AI Code Review Assistant");
    }

    #[test]
    fn test_preview_truncates_on_char_boundaries() {
        assert_eq!(preview("short", 50), "short");
        assert_eq!(preview("exactly ten", 11), "exactly ten");
        assert_eq!(preview("una señal más larga", 8), "una seña...");
    }

    #[test]
    fn test_render_multiline_escapes_markup() {
        let rendered = render_multiline("Test <script>alert(1)</script>");
        assert!(rendered.contains("Test"));
        assert!(!rendered.contains("<script"));
        assert_eq!(
            rendered,
            "Test &lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_render_multiline_keeps_line_breaks() {
        assert_eq!(render_multiline("a\nb"), "a<br>b");
    }

    #[test]
    fn test_prompt_decodes_with_missing_fields() {
        let prompt: Prompt = serde_json::from_str("{\"id\":\"p9\",\"title\":\"Bare\"}").unwrap();
        assert_eq!(prompt.id, "p9");
        assert_eq!(prompt.title, "Bare");
        assert!(prompt.description.is_empty());
        assert_eq!(prompt.rating, 0.0);
        assert!(!prompt.featured);
        assert!(prompt.tags.is_empty());
    }
}
