pub mod newspaper;

pub use newspaper::{render_newspaper_document, NewsPhoto, Newspaper, NewspaperPage};
