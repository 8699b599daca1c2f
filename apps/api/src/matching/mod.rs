// Matching engine: tag extraction, similarity scoring, ranking.
// Pure and synchronous — no I/O, no shared state. The catalog service feeds it
// plain in-memory collections.

pub mod ranker;
pub mod scorer;
pub mod tags;
pub mod vector;
