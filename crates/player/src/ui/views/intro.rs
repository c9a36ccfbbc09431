//! Intro screen: pick a level and start.

use newsdesk_domain::WizardLevel;

use crate::state::WizardSession;
use crate::ui::error::ViewError;
use crate::ui::routes::Route;

#[derive(Debug, Default)]
pub struct IntroView;

impl IntroView {
    pub fn new() -> Self {
        Self
    }

    /// Clears both steps. The level survives so "start" works straight away
    /// on a return visit.
    pub fn on_enter(&mut self, session: &mut WizardSession) {
        session.reset_step1_data();
        session.reset_step2_data();
    }

    pub fn levels(&self) -> &'static [WizardLevel] {
        WizardLevel::all()
    }

    pub fn select_level(&mut self, session: &mut WizardSession, level: WizardLevel) {
        session.set_level(level);
    }

    pub fn start(&self, session: &WizardSession) -> Result<Route, ViewError> {
        match session.level() {
            Some(level) => {
                tracing::info!(session_id = %session.id(), level = %level, "Wizard started");
                Ok(Route::Step1Route {})
            }
            None => Err(ViewError::LevelNotSelected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::test_support::session;
    use newsdesk_domain::{Article, Step1Patch, Step2Patch};

    #[test]
    fn test_start_requires_a_level() {
        let mut view = IntroView::new();
        let mut session = session();

        assert_eq!(view.start(&session), Err(ViewError::LevelNotSelected));

        view.select_level(&mut session, WizardLevel::Intermediate);
        assert_eq!(view.start(&session), Ok(Route::Step1Route {}));
    }

    #[test]
    fn test_enter_clears_steps_but_keeps_level() {
        let mut view = IntroView::new();
        let mut session = session();
        session.set_level(WizardLevel::Advanced);
        session.set_step1_data(Step1Patch::default().who("X"));
        session.set_step2_data(Step2Patch::default().article(Article::new("H", "C")));

        view.on_enter(&mut session);

        assert_eq!(session.level(), Some(WizardLevel::Advanced));
        assert!(session.step1().who.is_empty());
        assert!(session.step2().article.is_blank());
    }

    #[test]
    fn test_levels_in_display_order() {
        let view = IntroView::new();
        assert_eq!(
            view.levels(),
            &[
                WizardLevel::Beginner,
                WizardLevel::Intermediate,
                WizardLevel::Advanced
            ]
        );
    }
}
