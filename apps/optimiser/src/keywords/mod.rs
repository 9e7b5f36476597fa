// Keyword table ingestion: parsing pasted keyword/volume lists into an ordered table.

pub mod handlers;
pub mod models;
pub mod parser;
