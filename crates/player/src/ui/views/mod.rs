//! View controllers, one per route.
//!
//! Each view borrows the session for the duration of a call and keeps only
//! its own transient state (form values, guard flags, notices).

pub mod intro;
pub mod step1;
pub mod step2;
pub mod step3;

pub use intro::IntroView;
pub use step1::{Step1Form, Step1View};
pub use step2::{ArticleOutcome, Step2View};
pub use step3::Step3View;
