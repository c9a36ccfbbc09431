pub mod wizard_state;

pub use wizard_state::WizardState;
