//! Step 3: the finished newspaper page.

use crate::ports::outbound::{HostMessage, ParentFramePort, ANY_ORIGIN};
use crate::state::WizardSession;
use crate::ui::presentation::components::{render_newspaper_document, NewspaperPage};
use crate::ui::routes::Route;

#[derive(Debug, Clone, Default)]
pub struct Step3View;

impl Step3View {
    pub fn new() -> Self {
        Self
    }

    /// Tells an embedding page that the activity is finished.
    /// Returns whether a message went out.
    pub fn on_enter(&mut self, session: &WizardSession, parent_frame: &dyn ParentFramePort) -> bool {
        if !parent_frame.is_embedded() {
            return false;
        }

        match parent_frame.post_message(&HostMessage::content_finished(), ANY_ORIGIN) {
            Ok(()) => {
                tracing::info!(session_id = %session.id(), "Notified parent frame");
                true
            }
            Err(e) => {
                tracing::warn!(session_id = %session.id(), error = %e, "Parent frame notification failed");
                false
            }
        }
    }

    pub fn page(&self, session: &WizardSession) -> NewspaperPage {
        NewspaperPage::from_session(session)
    }

    /// The page as a standalone HTML document, for saving to a file.
    pub fn render(&self, session: &WizardSession) -> String {
        render_newspaper_document(self.page(session))
    }

    /// Clears everything, level included, and returns to the intro.
    pub fn start_new(&mut self, session: &mut WizardSession) -> Route {
        session.reset();
        Route::IntroRoute {}
    }
}
