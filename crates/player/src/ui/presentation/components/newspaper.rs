//! The finished newspaper page.
//!
//! `Newspaper` is what step 3 shows. `render_newspaper_document` renders the
//! same component to a standalone HTML file for the terminal front end; the
//! static file has no image error swap since it carries no event handlers.

use chrono::Datelike;
use dioxus::prelude::*;
use newsdesk_domain::common::{format_byline_date, format_long_date};
use newsdesk_domain::{Step1Data, Step2Data, WizardLevel, IMAGE_ERROR_PLACEHOLDER};

use crate::state::WizardSession;
use crate::ui::STYLES;

pub const MASTHEAD: &str = "THE NEWS TIMES";
pub const TAGLINE: &str = "\"All the News That's Fit to Print\"";
pub const EDITION: &str = "Vol. 1, No. 1";

/// Everything the page shows, detached from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct NewspaperPage {
    pub level: Option<WizardLevel>,
    pub step1: Step1Data,
    pub step2: Step2Data,
    /// Year printed in the footer
    pub year: i32,
}

impl NewspaperPage {
    pub fn from_session(session: &WizardSession) -> Self {
        Self {
            level: session.level(),
            step1: session.step1().clone(),
            step2: session.step2().clone(),
            year: session.today().year(),
        }
    }
}

#[component]
pub fn Newspaper(page: NewspaperPage) -> Element {
    let step1 = &page.step1;
    let article = &page.step2.article;
    let paragraphs: Vec<String> = article
        .paragraphs()
        .into_iter()
        .map(str::to_string)
        .collect();
    let long_date = format_long_date(step1.date);
    let byline_date = format_byline_date(step1.date);

    rsx! {
        article {
            class: "paper",

            header {
                class: "masthead",
                div {
                    class: "meta",
                    span { "{long_date}" }
                    if let Some(level) = page.level {
                        span {
                            class: "badge",
                            style: "background:{level.badge_color()}",
                            "{level.display_name()}"
                        }
                    }
                    span { "{EDITION}" }
                }
                h1 { "{MASTHEAD}" }
                div { class: "tagline", "{TAGLINE}" }
            }

            section {
                class: "headline",
                h2 { "{article.headline}" }
                div {
                    class: "byline",
                    strong { "By {step1.who}" }
                    " | {step1.category} | {byline_date}"
                }
            }

            if let Some(image) = page.step2.selected_image() {
                section {
                    class: "body",
                    figure {
                        NewsPhoto { src: image.to_string(), alt: "News article".to_string() }
                        figcaption { "Photo: {step1.where_}" }
                    }
                    ArticleText { paragraphs: paragraphs.clone(), two_columns: false }
                }
            } else {
                section {
                    class: "body no-image",
                    ArticleText { paragraphs: paragraphs.clone(), two_columns: true }
                }
            }

            if let Some(extra) = step1.extra() {
                aside {
                    class: "note",
                    strong { "Note: " }
                    "{extra}"
                }
            }

            footer { "© {page.year} The News Times. All rights reserved." }
        }
    }
}

#[component]
fn ArticleText(paragraphs: Vec<String>, two_columns: bool) -> Element {
    let class = if two_columns { "text cols-2" } else { "text" };

    rsx! {
        div {
            class: "{class}",
            for paragraph in paragraphs.iter() {
                p { "{paragraph}" }
            }
        }
    }
}

/// Image that swaps to the error placeholder once if it fails to load.
#[component]
pub fn NewsPhoto(src: String, alt: String) -> Element {
    let mut current = use_signal(|| src.clone());

    rsx! {
        img {
            src: "{current}",
            alt: "{alt}",
            onerror: move |_| {
                if current.peek().as_str() != IMAGE_ERROR_PLACEHOLDER {
                    tracing::debug!(src = %current.peek(), "Image failed to load, showing placeholder");
                    current.set(IMAGE_ERROR_PLACEHOLDER.to_string());
                }
            },
        }
    }
}

// =============================================================================
// Static document
// =============================================================================

#[derive(Props, Clone, PartialEq)]
struct DocumentProps {
    page: NewspaperPage,
}

#[allow(non_snake_case)]
fn NewspaperDocument(props: DocumentProps) -> Element {
    let title = format!("{} | {}", props.page.step2.article.headline, MASTHEAD);

    rsx! {
        html {
            lang: "en",
            head {
                meta { charset: "utf-8" }
                title { "{title}" }
                style { dangerous_inner_html: STYLES }
            }
            body {
                class: "print",
                Newspaper { page: props.page.clone() }
            }
        }
    }
}

/// Render the page as a standalone HTML document. Text is escaped by the
/// renderer.
pub fn render_newspaper_document(page: NewspaperPage) -> String {
    let mut dom = VirtualDom::new_with_props(NewspaperDocument, DocumentProps { page });
    dom.rebuild_in_place();
    format!("<!DOCTYPE html>{}\n", dioxus_ssr::render(&dom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use newsdesk_domain::{Article, ImageRef, Step1Patch, Step2Patch};

    fn step1() -> Step1Data {
        let mut data = Step1Data::empty(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        data.apply(
            Step1Patch::default()
                .category("Science")
                .who("Mina & Jun")
                .where_("the <science> museum")
                .event_summary("Cool Discovery"),
        );
        data
    }

    fn step2(selected: Option<usize>) -> Step2Data {
        let mut data = Step2Data::default();
        data.apply(
            Step2Patch::default()
                .article(Article::new(
                    "Robots Visit School",
                    "First paragraph.\n\nSecond paragraph.",
                ))
                .images(vec![
                    ImageRef::new("https://img/1.png"),
                    ImageRef::new("https://img/2.png"),
                ])
                .selected_image_index(selected),
        );
        data
    }

    fn render(step1: Step1Data, step2: Step2Data) -> String {
        render_newspaper_document(NewspaperPage {
            level: Some(WizardLevel::Intermediate),
            step1,
            step2,
            year: 2026,
        })
    }

    #[test]
    fn test_page_has_masthead_dates_and_footer() {
        let html = render(step1(), step2(Some(1)));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>THE NEWS TIMES</h1>"));
        assert!(html.contains("Vol. 1, No. 1"));
        assert!(html.contains("Friday, October 16, 2026"));
        assert!(html.contains("Oct 16, 2026"));
        assert!(html.contains(">Intermediate</span>"));
        assert!(html.contains("© 2026 The News Times. All rights reserved."));
        assert!(html.contains("<title>Robots Visit School | THE NEWS TIMES</title>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render(step1(), step2(Some(0)));

        assert!(html.contains("<h2>Robots Visit School</h2>"));
        assert!(html.contains("By Mina &amp; Jun"));
        assert!(html.contains("Photo: the &lt;science&gt; museum"));
        assert!(!html.contains("<science>"));
    }

    #[test]
    fn test_selected_image_only() {
        let html = render(step1(), step2(Some(1)));

        assert!(html.contains("src=\"https://img/2.png\""));
        assert!(!html.contains("https://img/1.png"));
        assert!(html.contains("<p>First paragraph.</p>"));
        assert!(html.contains("<p>Second paragraph.</p>"));
        assert!(html.contains("class=\"text\""));
    }

    #[test]
    fn test_two_columns_without_image() {
        let html = render(step1(), step2(None));

        assert!(!html.contains("<img"));
        assert!(!html.contains("Photo:"));
        assert!(html.contains("class=\"text cols-2\""));
    }

    #[test]
    fn test_note_only_when_extra_present() {
        let html = render(step1(), step2(None));
        assert!(!html.contains("Note: "));

        let mut with_extra = step1();
        with_extra.apply(Step1Patch::default().extra("Bring a hat"));
        let html = render(with_extra, step2(None));
        assert!(html.contains("<strong>Note: </strong>Bring a hat"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render(step1(), step2(Some(0))), render(step1(), step2(Some(0))));
    }
}
