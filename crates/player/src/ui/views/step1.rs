//! Step 1: who, what, where and when.
//!
//! The form lives in the view until submit; only a complete form is written
//! to the session.

use chrono::NaiveDate;
use newsdesk_domain::{catalog, missing_fields, RequiredField, Step1Data, Step1Patch, WizardLevel};

use crate::state::WizardSession;
use crate::ui::error::ViewError;
use crate::ui::routes::Route;

/// In-progress form values. `date` is `None` while the field is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step1Form {
    pub category: String,
    pub date: Option<NaiveDate>,
    pub who: String,
    pub where_: String,
    pub event_summary: String,
    pub extra: String,
}

impl From<&Step1Data> for Step1Form {
    fn from(data: &Step1Data) -> Self {
        Self {
            category: data.category.clone(),
            date: Some(data.date),
            who: data.who.clone(),
            where_: data.where_.clone(),
            event_summary: data.event_summary.clone(),
            extra: data.extra.clone(),
        }
    }
}

impl Step1Form {
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        missing_fields(
            &self.category,
            &self.event_summary,
            self.date,
            &self.who,
            &self.where_,
        )
    }
}

#[derive(Debug, Default)]
pub struct Step1View {
    level: Option<WizardLevel>,
    form: Step1Form,
}

impl Step1View {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh form dated today.
    pub fn on_enter(&mut self, session: &mut WizardSession) {
        session.reset_step1_data();
        self.level = session.level();
        self.form = Step1Form::from(session.step1());
    }

    pub fn form(&self) -> &Step1Form {
        &self.form
    }

    pub fn categories(&self) -> &'static [&'static str] {
        self.level.map(catalog::categories).unwrap_or(&[])
    }

    /// Choices for the currently selected category.
    pub fn event_summaries(&self) -> &'static [&'static str] {
        match self.level {
            Some(level) if !self.form.category.is_empty() => {
                catalog::event_summaries(level, &self.form.category)
            }
            _ => &[],
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.form.category = category.into();
        let summary = self.form.event_summary.as_str();
        if !summary.is_empty() && !self.event_summaries().contains(&summary) {
            self.form.event_summary.clear();
        }
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.form.date = date;
    }

    pub fn set_who(&mut self, who: impl Into<String>) {
        self.form.who = who.into();
    }

    pub fn set_where(&mut self, where_: impl Into<String>) {
        self.form.where_ = where_.into();
    }

    pub fn set_event_summary(&mut self, summary: impl Into<String>) {
        self.form.event_summary = summary.into();
    }

    pub fn set_extra(&mut self, extra: impl Into<String>) {
        self.form.extra = extra.into();
    }

    /// Writes the whole form to the session, or lists what is missing.
    pub fn submit(&self, session: &mut WizardSession) -> Result<Route, ViewError> {
        let missing = self.form.missing_fields();
        let date = match self.form.date {
            Some(date) if missing.is_empty() => date,
            _ => {
                tracing::debug!(missing = ?missing, "Step 1 form incomplete");
                return Err(ViewError::MissingFields(missing));
            }
        };

        session.set_step1_data(
            Step1Patch::default()
                .category(self.form.category.clone())
                .date(date)
                .who(self.form.who.clone())
                .where_(self.form.where_.clone())
                .event_summary(self.form.event_summary.clone())
                .extra(self.form.extra.clone()),
        );
        Ok(Route::Step2Route {})
    }
}
