//! Scrapbox → Markdown tests

mod document;
mod inline;
