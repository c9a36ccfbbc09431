//! Terminal front end.
//!
//! Walks the four views over a line-based reader and writer. Generic over
//! both so a whole run can be scripted in tests.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use newsdesk_domain::common::parse_form_date;
use newsdesk_domain::{RequiredField, WizardLevel};
use newsdesk_engine::GenerationClient;

use crate::ports::outbound::ParentFramePort;
use crate::state::{Platform, WizardSession};
use crate::ui::error::ViewError;
use crate::ui::routes::Route;
use crate::ui::views::{ArticleOutcome, IntroView, Step1View, Step2View, Step3View};

pub const DEFAULT_OUTPUT_PATH: &str = "newspaper.html";

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Input closed")]
    InputClosed,
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Preselected level for the first article
    pub level: Option<WizardLevel>,
    pub output_path: PathBuf,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            level: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

pub struct TerminalApp<R, W> {
    input: R,
    output: W,
    session: WizardSession,
    client: GenerationClient,
    parent_frame: Arc<dyn ParentFramePort>,
    options: TerminalOptions,
}

impl<R: BufRead, W: Write> TerminalApp<R, W> {
    pub fn new(
        input: R,
        output: W,
        platform: &Platform,
        client: GenerationClient,
        options: TerminalOptions,
    ) -> Self {
        Self {
            input,
            output,
            session: WizardSession::new(platform.clock()),
            client,
            parent_frame: platform.parent_frame(),
            options,
        }
    }

    /// Runs until the user stops or input ends.
    pub async fn run(mut self) -> Result<(), TerminalError> {
        match self.run_loop().await {
            Err(TerminalError::InputClosed) => {
                tracing::debug!("Input closed, leaving wizard");
                Ok(())
            }
            other => other,
        }
    }

    async fn run_loop(&mut self) -> Result<(), TerminalError> {
        let mut route = Route::IntroRoute {};
        loop {
            tracing::debug!(route = %route, "Entering screen");
            route = match route {
                Route::IntroRoute {} => self.intro()?,
                Route::Step1Route {} => self.step1()?,
                Route::Step2Route {} => self.step2().await?,
                Route::Step3Route {} => match self.step3().await? {
                    Some(next) => next,
                    None => return Ok(()),
                },
            };
        }
    }

    // =========================================================================
    // Steps
    // =========================================================================

    fn intro(&mut self) -> Result<Route, TerminalError> {
        let mut view = IntroView::new();
        view.on_enter(&mut self.session);

        self.say("")?;
        self.say("NEWS CREATOR - Create your own English newspaper.")?;

        if let Some(level) = self.options.level.take() {
            view.select_level(&mut self.session, level);
        }

        loop {
            if self.session.level().is_none() {
                let names: Vec<&str> = view.levels().iter().map(|l| l.display_name()).collect();
                self.list(&names)?;
                let answer = self.ask("Choose a level")?;
                match pick(&answer, &names).and_then(|name| name.parse::<WizardLevel>().ok()) {
                    Some(level) => view.select_level(&mut self.session, level),
                    None => {
                        self.say("Please pick one of the levels.")?;
                        continue;
                    }
                }
            }

            match view.start(&self.session) {
                Ok(route) => {
                    if let Some(level) = self.session.level() {
                        self.say(format!("Level: {}", level))?;
                    }
                    return Ok(route);
                }
                Err(e) => self.say(e)?,
            }
        }
    }

    fn step1(&mut self) -> Result<Route, TerminalError> {
        let mut view = Step1View::new();
        view.on_enter(&mut self.session);

        self.say("")?;
        self.say("Step 1. Plan your article.")?;

        for field in [
            RequiredField::Category,
            RequiredField::EventSummary,
            RequiredField::Date,
            RequiredField::Who,
            RequiredField::Where,
        ] {
            self.ask_field(&mut view, field)?;
        }
        let extra = self.ask("Anything else to add? (optional)")?;
        view.set_extra(extra);

        loop {
            match view.submit(&mut self.session) {
                Ok(route) => return Ok(route),
                Err(ViewError::MissingFields(missing)) => {
                    self.say(ViewError::MissingFields(missing.clone()))?;
                    for field in missing {
                        self.ask_field(&mut view, field)?;
                    }
                }
                Err(e) => self.say(e)?,
            }
        }
    }

    fn ask_field(&mut self, view: &mut Step1View, field: RequiredField) -> Result<(), TerminalError> {
        match field {
            RequiredField::Category => {
                let options = view.categories();
                self.list(options)?;
                let answer = self.ask("Category")?;
                view.set_category(pick(&answer, options).unwrap_or_default());
            }
            RequiredField::EventSummary => {
                let options = view.event_summaries();
                if options.is_empty() {
                    return Ok(());
                }
                self.list(options)?;
                let answer = self.ask("Event summary")?;
                view.set_event_summary(pick(&answer, options).unwrap_or_default());
            }
            RequiredField::Date => {
                let answer = self.ask("Date (YYYY-MM-DD, blank = today)")?;
                if answer.is_empty() {
                    view.set_date(Some(self.session.today()));
                } else {
                    match parse_form_date(&answer) {
                        Ok(date) => view.set_date(Some(date)),
                        Err(_) => {
                            self.say("That date doesn't look like YYYY-MM-DD.")?;
                            view.set_date(None);
                        }
                    }
                }
            }
            RequiredField::Who => {
                let answer = self.ask("Who")?;
                view.set_who(answer);
            }
            RequiredField::Where => {
                let answer = self.ask("Where")?;
                view.set_where(answer);
            }
        }
        Ok(())
    }

    async fn step2(&mut self) -> Result<Route, TerminalError> {
        let mut view = Step2View::new();

        self.say("")?;
        self.say("Step 2. Write the article and select an image.")?;
        self.say("Generating article...")?;
        let outcome = view.on_enter(&mut self.session, &self.client).await;
        if outcome == ArticleOutcome::Fallback {
            self.show_notice(&mut view)?;
        }

        let article = self.session.step2().article.clone();
        self.say(format!("\nHeadline: {}", article.headline))?;
        self.say(format!("\n{}\n", article.content))?;

        let headline = self.ask("New headline (blank to keep)")?;
        if !headline.is_empty() {
            view.edit_headline(&mut self.session, headline);
        }
        let content = self.ask("New content (blank to keep)")?;
        if !content.is_empty() {
            view.edit_content(&mut self.session, content);
        }

        loop {
            self.say("Generating images...")?;
            match view.generate_images(&mut self.session, &self.client).await {
                Ok(_) => break,
                Err(ViewError::ArticleMissing) => {
                    self.show_notice(&mut view)?;
                    let content = self.ask("Content")?;
                    view.edit_content(&mut self.session, content);
                }
                Err(_) => {
                    self.show_notice(&mut view)?;
                    if !self.confirm("Try again?")? {
                        break;
                    }
                }
            }
        }

        let images: Vec<String> = self
            .session
            .step2()
            .images
            .iter()
            .map(|image| image.to_string())
            .collect();
        loop {
            let options: Vec<&str> = images.iter().map(String::as_str).collect();
            self.list(&options)?;
            let answer = self.ask("Choose an image")?;
            if let Some(index) = pick_index(&answer, options.len()) {
                view.select_image(&mut self.session, index);
            }
            match view.next(&self.session) {
                Ok(route) => return Ok(route),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Returns the next screen, or `None` when the user is done.
    async fn step3(&mut self) -> Result<Option<Route>, TerminalError> {
        let mut view = Step3View::new();
        view.on_enter(&self.session, self.parent_frame.as_ref());

        let html = view.render(&self.session);
        let path = self.options.output_path.clone();
        self.say("")?;
        self.save_page(&html, path).await?;

        if self.confirm("Start a new article?")? {
            Ok(Some(view.start_new(&mut self.session)))
        } else {
            Ok(None)
        }
    }

    /// Writes the page, asking for another path until a write succeeds or
    /// the user skips. A failed write never ends the wizard.
    async fn save_page(&mut self, html: &str, mut path: PathBuf) -> Result<(), TerminalError> {
        loop {
            match write_page(&path, html).await {
                Ok(()) => {
                    tracing::info!(
                        session_id = %self.session.id(),
                        path = %path.display(),
                        "Newspaper written"
                    );
                    self.say(format!("Step 3. Your newspaper is ready: {}", path.display()))?;
                    return Ok(());
                }
                Err(e) => {
                    tracing::error!(
                        session_id = %self.session.id(),
                        path = %path.display(),
                        error = %e,
                        "Failed to write newspaper"
                    );
                    self.say(format!(
                        "! Could not save the newspaper to {}: {}",
                        path.display(),
                        e
                    ))?;
                    let answer = self.ask("Save to another file (blank to skip)")?;
                    if answer.is_empty() {
                        self.say("Newspaper not saved.")?;
                        return Ok(());
                    }
                    path = PathBuf::from(answer);
                }
            }
        }
    }

    // =========================================================================
    // Line I/O
    // =========================================================================

    fn say(&mut self, text: impl Display) -> Result<(), TerminalError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn list(&mut self, options: &[&str]) -> Result<(), TerminalError> {
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option)?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, TerminalError> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TerminalError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, TerminalError> {
        let answer = self.ask(&format!("{} [y/N]", prompt))?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn show_notice(&mut self, view: &mut Step2View) -> Result<(), TerminalError> {
        if let Some(notice) = view.notice().map(str::to_string) {
            self.say(format!("! {}", notice))?;
            view.dismiss_notice();
        }
        Ok(())
    }
}

async fn write_page(path: &Path, html: &str) -> io::Result<()> {
    tokio::fs::write(path, html).await
}

/// 1-based number or exact (case-insensitive) text.
fn pick(answer: &str, options: &[&str]) -> Option<String> {
    if let Some(index) = pick_index(answer, options.len()) {
        return Some(options[index].to_string());
    }
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(answer.trim()))
        .map(|option| option.to_string())
}

fn pick_index(answer: &str, len: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{RecordingParentFrame, StaticHost};
    use chrono::{TimeZone, Utc};
    use newsdesk_engine::infrastructure::clock::FixedClock;
    use newsdesk_engine::infrastructure::ports::{
        ImageGenError, ImageResult, LlmError, LlmResponse, MockImageGenPort, MockLlmPort,
    };

    fn platform() -> Platform {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        Platform::new(
            StaticHost::new(),
            RecordingParentFrame::detached(),
            FixedClock(now),
        )
    }

    fn working_client() -> GenerationClient {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().returning(|_| {
            Ok(LlmResponse::text(
                r#"{"headline":"Mina Wins","content":"Mina won the race.\n\nEveryone cheered."}"#,
            ))
        });
        let mut image_gen = MockImageGenPort::new();
        image_gen.expect_generate().returning(|request| {
            let url = if request.prompt.ends_with("Main scene.") {
                "https://img/1.png"
            } else {
                "https://img/2.png"
            };
            Ok(ImageResult { url: url.into() })
        });
        GenerationClient::new(Arc::new(llm), Arc::new(image_gen))
    }

    async fn run_script(
        script: &str,
        client: GenerationClient,
        options: TerminalOptions,
    ) -> String {
        let mut output = Vec::new();
        let app = TerminalApp::new(script.as_bytes(), &mut output, &platform(), client, options);
        app.run().await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_full_run_writes_newspaper() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.html");
        let script = "\
1
1
1

Mina
the park

Mina Wins Big

2
n
";
        let output = run_script(
            script,
            working_client(),
            TerminalOptions {
                level: None,
                output_path: path.clone(),
            },
        )
        .await;

        assert!(output.contains("Level: Beginner"));
        assert!(output.contains("Headline: Mina Wins"));
        assert!(output.contains("Your newspaper is ready"));

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<h2>Mina Wins Big</h2>"));
        assert!(html.contains("src=\"https://img/2.png\""));
        assert!(html.contains("By Mina"));
        assert!(html.contains("Sports"));
    }

    #[tokio::test]
    async fn test_missing_fields_are_asked_again() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.html");
        // Category and where left blank on the first pass
        let script = "\nbad-date\nMina\n\n\nArt\nFun Art\n2026-10-01\nthe gym\n";
        let output = run_script(
            script,
            working_client(),
            TerminalOptions {
                level: Some(WizardLevel::Beginner),
                output_path: path,
            },
        )
        .await;

        assert!(output.contains("That date doesn't look like YYYY-MM-DD."));
        assert!(output.contains("Please fill in: Category, Event Summary, Date, Where"));
        assert!(output.contains("Step 2."));
    }

    #[tokio::test]
    async fn test_generation_failures_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.html");

        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Err(LlmError::RequestFailed("HTTP 502".into())));
        let mut image_gen = MockImageGenPort::new();
        image_gen
            .expect_generate()
            .returning(|_| Err(ImageGenError::Timeout));
        let client = GenerationClient::new(Arc::new(llm), Arc::new(image_gen));

        let script = "\
Space
Big Star

Jun
the roof



n
1
n
";
        let output = run_script(
            script,
            client,
            TerminalOptions {
                level: Some(WizardLevel::Beginner),
                output_path: path.clone(),
            },
        )
        .await;

        assert!(output.contains("! Failed to generate article. Using a template article."));
        assert!(output.contains("Headline: Jun at the roof"));
        assert!(output.contains("! Failed to generate images. Please try again."));

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("placeholder.com/400x300?text=Image+1"));
    }

    const FINISHED_RUN: &str = "\
1
1
1

Mina
the park



2
";

    #[tokio::test]
    async fn test_unwritable_output_keeps_the_wizard_going() {
        let script = format!("{FINISHED_RUN}\nn\n");
        let output = run_script(
            &script,
            working_client(),
            TerminalOptions {
                level: None,
                output_path: PathBuf::from("/nonexistent_dir/x/paper.html"),
            },
        )
        .await;

        assert!(output.contains("! Could not save the newspaper to /nonexistent_dir/x/paper.html"));
        assert!(output.contains("Newspaper not saved."));
        assert!(output.contains("Start a new article?"));
        assert!(!output.contains("Your newspaper is ready"));
    }

    #[tokio::test]
    async fn test_save_can_be_retried_at_another_path() {
        let dir = tempfile::tempdir().unwrap();
        let retry = dir.path().join("retry.html");
        let script = format!("{FINISHED_RUN}{}\nn\n", retry.display());
        let output = run_script(
            &script,
            working_client(),
            TerminalOptions {
                level: None,
                output_path: PathBuf::from("/nonexistent_dir/x/paper.html"),
            },
        )
        .await;

        assert!(output.contains("Could not save"));
        assert!(output.contains(&format!("Your newspaper is ready: {}", retry.display())));
        assert!(output.contains("Start a new article?"));
        let html = std::fs::read_to_string(&retry).unwrap();
        assert!(html.contains("<h2>Mina Wins</h2>"));
    }

    #[tokio::test]
    async fn test_closed_input_ends_quietly() {
        let output = run_script("", working_client(), TerminalOptions::default()).await;
        assert!(output.contains("Choose a level"));
    }

    #[test]
    fn test_pick_accepts_numbers_and_names() {
        let options = ["Sports", "Science"];
        assert_eq!(pick("2", &options).as_deref(), Some("Science"));
        assert_eq!(pick("sports", &options).as_deref(), Some("Sports"));
        assert_eq!(pick("3", &options), None);
        assert_eq!(pick("", &options), None);
    }
}
