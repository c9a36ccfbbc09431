//! Wizard routes. Every screen renders inside the scaled [`Stage`].

use dioxus::prelude::*;

mod intro;
mod stage;
mod step1;
mod step2;
mod step3;

pub use intro::IntroRoute;
pub use stage::Stage;
pub use step1::Step1Route;
pub use step2::Step2Route;
pub use step3::Step3Route;

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Stage)]
    #[route("/")]
    IntroRoute {},
    #[route("/step1")]
    Step1Route {},
    #[route("/step2")]
    Step2Route {},
    #[route("/step3")]
    Step3Route {},
}
