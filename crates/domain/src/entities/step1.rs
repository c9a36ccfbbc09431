//! Step 1 of the wizard: the who / what / where / when of the story.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Details entered on the first data-entry screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step1Data {
    pub category: String,
    pub date: NaiveDate,
    pub who: String,
    #[serde(rename = "where")]
    pub where_: String,
    pub event_summary: String,
    /// Optional free text; empty means absent
    pub extra: String,
}

impl Step1Data {
    /// Default value: every text field empty, dated `today`.
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            category: String::new(),
            date: today,
            who: String::new(),
            where_: String::new(),
            event_summary: String::new(),
            extra: String::new(),
        }
    }

    /// Shallow merge: fields left as `None` keep their current value.
    pub fn apply(&mut self, patch: Step1Patch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(who) = patch.who {
            self.who = who;
        }
        if let Some(where_) = patch.where_ {
            self.where_ = where_;
        }
        if let Some(event_summary) = patch.event_summary {
            self.event_summary = event_summary;
        }
        if let Some(extra) = patch.extra {
            self.extra = extra;
        }
    }

    pub fn extra(&self) -> Option<&str> {
        let trimmed = self.extra.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        missing_fields(
            &self.category,
            &self.event_summary,
            Some(self.date),
            &self.who,
            &self.where_,
        )
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::missing_fields(missing))
        }
    }
}

/// Partial update for [`Step1Data`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step1Patch {
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub who: Option<String>,
    pub where_: Option<String>,
    pub event_summary: Option<String>,
    pub extra: Option<String>,
}

impl Step1Patch {
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    pub fn date(mut self, value: NaiveDate) -> Self {
        self.date = Some(value);
        self
    }

    pub fn who(mut self, value: impl Into<String>) -> Self {
        self.who = Some(value.into());
        self
    }

    pub fn where_(mut self, value: impl Into<String>) -> Self {
        self.where_ = Some(value.into());
        self
    }

    pub fn event_summary(mut self, value: impl Into<String>) -> Self {
        self.event_summary = Some(value.into());
        self
    }

    pub fn extra(mut self, value: impl Into<String>) -> Self {
        self.extra = Some(value.into());
        self
    }
}

impl From<Step1Data> for Step1Patch {
    fn from(data: Step1Data) -> Self {
        Self {
            category: Some(data.category),
            date: Some(data.date),
            who: Some(data.who),
            where_: Some(data.where_),
            event_summary: Some(data.event_summary),
            extra: Some(data.extra),
        }
    }
}

/// Form fields that must be filled before leaving step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequiredField {
    Category,
    EventSummary,
    Date,
    Who,
    Where,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Category => "Category",
            RequiredField::EventSummary => "Event Summary",
            RequiredField::Date => "Date",
            RequiredField::Who => "Who",
            RequiredField::Where => "Where",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shared required-field check for the saved data and the in-progress form.
///
/// Category and event summary come from pick lists, so only emptiness
/// counts. Who and where are typed, so whitespace-only counts as missing.
pub fn missing_fields(
    category: &str,
    event_summary: &str,
    date: Option<NaiveDate>,
    who: &str,
    where_: &str,
) -> Vec<RequiredField> {
    let mut missing = Vec::new();
    if category.is_empty() {
        missing.push(RequiredField::Category);
    }
    if event_summary.is_empty() {
        missing.push(RequiredField::EventSummary);
    }
    if date.is_none() {
        missing.push(RequiredField::Date);
    }
    if who.trim().is_empty() {
        missing.push(RequiredField::Who);
    }
    if where_.trim().is_empty() {
        missing.push(RequiredField::Where);
    }
    missing
}
