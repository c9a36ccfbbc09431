//! Pure helpers shared by the engine and the player.
//!
//! No side effects, no I/O. Everything here must also build for WASM.

pub mod datetime;

pub use datetime::{
    format_byline_date, format_form_date, format_long_date, format_short_date, parse_form_date,
};
