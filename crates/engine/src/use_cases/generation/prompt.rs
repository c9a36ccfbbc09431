//! Prompt construction for article text and illustrations.

use newsdesk_domain::common::format_short_date;
use newsdesk_domain::{Article, Step1Data, WizardLevel};

/// Sampling temperature for article text.
pub const ARTICLE_TEMPERATURE: f32 = 0.7;

pub const ARTICLE_SYSTEM_PROMPT: &str = "You are a professional news writer specializing in \
creating educational content for elementary school students. You always follow word count \
requirements precisely.";

/// Builds the user prompt for one article.
///
/// Embeds the step 1 facts and the level's length policy, and asks for a
/// JSON object with `headline` and `content`.
pub fn build_article_prompt(level: WizardLevel, step1: &Step1Data) -> String {
    let policy = level.length_policy();
    let extra_line = step1
        .extra()
        .map(|extra| format!("- Extra: {extra}"))
        .unwrap_or_default();

    format!(
        "You are a news writer for elementary school students at {level} level.

Create a news article with the following information:
- Category: {category}
- Date: {date}
- Who: {who}
- Where: {where_}
- Event Summary: {summary}
{extra_line}

REQUIREMENTS (STRICTLY FOLLOW):
1. Headline: One catchy line (max 15 words)
2. Article Content:
   - MUST be exactly {paragraphs} paragraphs
   - Each paragraph MUST have {sentences}
   - Total word count MUST be between {min} and {max} words
   - Use {style}
   - Write in simple, engaging language for {level} level students
   - DO NOT exceed {max} words
   - DO NOT write less than {min} words

Format your response as JSON with exactly these fields:
{{
  \"headline\": \"your headline here\",
  \"content\": \"your article content here ({paragraphs} paragraphs, {min}-{max} words)\"
}}",
        category = step1.category,
        date = format_short_date(step1.date),
        who = step1.who,
        where_ = step1.where_,
        summary = step1.event_summary,
        paragraphs = policy.paragraphs,
        sentences = policy.sentences,
        min = policy.min_words,
        max = policy.max_words,
        style = policy.style,
    )
}

fn image_base_prompt(article: &Article) -> String {
    format!(
        "Child-friendly colorful illustration for elementary news: {}",
        article.headline
    )
}

/// Prompt for the first candidate illustration.
pub fn main_scene_prompt(article: &Article) -> String {
    format!("{}. Main scene.", image_base_prompt(article))
}

/// Prompt for the second candidate illustration.
pub fn alternate_scene_prompt(article: &Article) -> String {
    format!("{}. Different moment or perspective.", image_base_prompt(article))
}
