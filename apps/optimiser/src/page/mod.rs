// Page acquisition: fetch raw markup, extract SEO elements from it.

pub mod extractor;
pub mod fetcher;
pub mod models;
