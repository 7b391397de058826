//! Markdown → Scrapbox tests

mod document;
mod inline;
