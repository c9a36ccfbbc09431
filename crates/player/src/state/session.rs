//! Wizard session state
//!
//! One `WizardSession` per run of the wizard, owned by the composition root
//! and lent to whichever view is active. Merge-updates and resets are the
//! only ways to change it. Cloning keeps the id, so a copy can be worked on
//! across an await and written back.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use newsdesk_domain::{SessionId, Step1Data, Step1Patch, Step2Data, Step2Patch, WizardLevel};
use newsdesk_engine::infrastructure::ports::ClockPort;

#[derive(Clone)]
pub struct WizardSession {
    id: SessionId,
    clock: Arc<dyn ClockPort>,
    level: Option<WizardLevel>,
    step1: Step1Data,
    step2: Step2Data,
}

impl WizardSession {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        let today = local_today(clock.as_ref());
        let id = SessionId::new();
        tracing::debug!(session_id = %id, "Wizard session created");
        Self {
            id,
            clock,
            level: None,
            step1: Step1Data::empty(today),
            step2: Step2Data::default(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Today's date in the user's local time zone.
    pub fn today(&self) -> NaiveDate {
        local_today(self.clock.as_ref())
    }

    pub fn level(&self) -> Option<WizardLevel> {
        self.level
    }

    pub fn step1(&self) -> &Step1Data {
        &self.step1
    }

    pub fn step2(&self) -> &Step2Data {
        &self.step2
    }

    pub fn set_level(&mut self, level: WizardLevel) {
        tracing::debug!(session_id = %self.id, level = %level, "Level set");
        self.level = Some(level);
    }

    pub fn set_step1_data(&mut self, patch: Step1Patch) {
        self.step1.apply(patch);
    }

    /// Top-level merge only; echo `article`/`images` to keep them.
    pub fn set_step2_data(&mut self, patch: Step2Patch) {
        self.step2.apply(patch);
    }

    pub fn set_selected_image(&mut self, index: Option<usize>) {
        self.step2.selected_image_index = index;
    }

    pub fn reset_step1_data(&mut self) {
        self.step1 = Step1Data::empty(self.today());
    }

    pub fn reset_step2_data(&mut self) {
        self.step2 = Step2Data::default();
    }

    pub fn reset(&mut self) {
        tracing::debug!(session_id = %self.id, "Wizard session reset");
        self.level = None;
        self.reset_step1_data();
        self.reset_step2_data();
    }
}

fn local_today(clock: &dyn ClockPort) -> NaiveDate {
    clock.now().with_timezone(&Local).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use newsdesk_domain::{Article, ImageRef};
    use newsdesk_engine::infrastructure::clock::FixedClock;
    use newsdesk_engine::infrastructure::ports::MockClockPort;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn session() -> WizardSession {
        WizardSession::new(Arc::new(FixedClock(instant())))
    }

    fn expected_today() -> NaiveDate {
        instant().with_timezone(&Local).date_naive()
    }

    #[test]
    fn test_new_session_is_empty_and_dated_today() {
        let session = session();
        assert_eq!(session.level(), None);
        assert_eq!(session.step1(), &Step1Data::empty(expected_today()));
        assert_eq!(session.step2(), &Step2Data::default());
    }

    #[test]
    fn test_step1_updates_merge() {
        let mut session = session();
        session.set_step1_data(Step1Patch::default().who("X"));
        session.set_step1_data(Step1Patch::default().where_("Y"));

        assert_eq!(session.step1().who, "X");
        assert_eq!(session.step1().where_, "Y");
    }

    #[test]
    fn test_step2_merge_is_shallow() {
        let mut session = session();
        session.set_step2_data(
            Step2Patch::default()
                .article(Article::new("H", "C"))
                .images(vec![ImageRef::new("a"), ImageRef::new("b")]),
        );
        session.set_step2_data(Step2Patch::default().article(Article::new("H2", "")));

        assert_eq!(session.step2().article, Article::new("H2", ""));
        assert_eq!(session.step2().images.len(), 2);
    }

    #[test]
    fn test_set_selected_image_is_independent() {
        let mut session = session();
        session.set_selected_image(Some(1));
        assert_eq!(session.step2().selected_image_index, Some(1));
        session.set_selected_image(None);
        assert_eq!(session.step2().selected_image_index, None);
    }

    #[test]
    fn test_reset_step1_uses_a_fresh_date() {
        let later = Utc.with_ymd_and_hms(2026, 12, 24, 12, 0, 0).unwrap();
        let mut clock = MockClockPort::new();
        let mut calls = 0;
        clock.expect_now().returning(move || {
            calls += 1;
            if calls == 1 {
                instant()
            } else {
                later
            }
        });
        let mut session = WizardSession::new(Arc::new(clock));
        session.set_step1_data(
            Step1Patch::default()
                .category("Art")
                .who("X")
                .where_("Y")
                .event_summary("Fun Art")
                .extra("note"),
        );

        session.reset_step1_data();

        let step1 = session.step1();
        assert!(step1.category.is_empty());
        assert!(step1.who.is_empty());
        assert!(step1.where_.is_empty());
        assert!(step1.event_summary.is_empty());
        assert!(step1.extra.is_empty());
        assert_eq!(step1.date, later.with_timezone(&Local).date_naive());
    }

    #[test]
    fn test_full_reset_clears_level_and_steps() {
        let mut session = session();
        session.set_level(WizardLevel::Advanced);
        session.set_step1_data(Step1Patch::default().who("X"));
        session.set_step2_data(Step2Patch::default().article(Article::new("H", "C")));
        session.set_selected_image(Some(0));

        session.reset();

        assert_eq!(session.level(), None);
        assert!(session.step1().who.is_empty());
        assert_eq!(session.step2(), &Step2Data::default());
    }

    #[test]
    fn test_partial_resets_keep_level() {
        let mut session = session();
        session.set_level(WizardLevel::Beginner);
        session.reset_step1_data();
        session.reset_step2_data();
        assert_eq!(session.level(), Some(WizardLevel::Beginner));
    }
}
