use crate::mock::{self, ALL_FILTER};
use dioxus::prelude::*;
use shared_types::Article;
use shared_ui::{Badge, BadgeTone, Button, ButtonVariant, Card, ErrorFallback, SearchField};

/// Article browser with category tabs, search and a reader view.
#[component]
pub fn Wellness() -> Element {
    let articles = use_hook(mock::articles);
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| ALL_FILTER.to_string());
    let mut reading = use_signal(|| Option::<Article>::None);

    let articles = match articles {
        Ok(articles) => articles,
        Err(e) => return rsx! { ErrorFallback { message: e.friendly_message() } },
    };

    let featured = mock::featured_article(&articles, &search(), &category());
    let grid = mock::filter_articles(&articles, &search(), &category());
    let nothing_found = featured.is_none() && grid.is_empty();

    rsx! {
        div { class: "page wellness-page",
            div { class: "page-toolbar",
                SearchField {
                    value: search(),
                    placeholder: "Search articles",
                    on_input: move |e: FormEvent| search.set(e.value()),
                }
            }
            div { class: "tab-row", role: "tablist",
                for label in mock::article_categories() {
                    button {
                        key: "{label}",
                        class: "tab",
                        r#type: "button",
                        role: "tab",
                        "aria-selected": if category() == label { "true" } else { "false" },
                        onclick: {
                            let label = label.clone();
                            move |_| category.set(label.clone())
                        },
                        "{label}"
                    }
                }
            }

            if let Some(article) = featured {
                Card {
                    class: "featured-article",
                    interactive: true,
                    title: article.title.clone(),
                    description: article.excerpt.clone(),
                    onclick: {
                        let article = article.clone();
                        move |_| reading.set(Some(article.clone()))
                    },
                    Badge { tone: BadgeTone::Accent, "Featured" }
                }
            }

            div { class: "card-grid",
                for article in grid {
                    ArticleCard {
                        key: "{article.id}",
                        article: article.clone(),
                        on_open: move |a: Article| reading.set(Some(a)),
                    }
                }
            }

            if nothing_found {
                div { class: "page-empty",
                    p { "No articles match your filters." }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            search.set(String::new());
                            category.set(ALL_FILTER.to_string());
                        },
                        "Clear filters"
                    }
                }
            }

            if let Some(article) = reading() {
                ArticleReader { article, on_close: move |_| reading.set(None) }
            }
        }
    }
}

#[component]
fn ArticleCard(article: Article, on_open: EventHandler<Article>) -> Element {
    let meta = format!("{} · {}", article.author, article.read_time_label());

    rsx! {
        Card {
            interactive: true,
            title: article.title.clone(),
            description: article.excerpt.clone(),
            onclick: {
                let article = article.clone();
                move |_| on_open.call(article.clone())
            },
            div { class: "article-meta",
                Badge { {article.category.label()} }
                span { "{meta}" }
            }
        }
    }
}

#[component]
fn ArticleReader(article: Article, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal article-reader",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                Badge { {article.category.label()} }
                h2 { class: "modal-title", "{article.title}" }
                p { class: "modal-subtitle",
                    "{article.author} · "
                    {article.date_label()}
                    " · "
                    {article.read_time_label()}
                }
                p { class: "article-body", "{article.content}" }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
