// Catalog: lessons and modules behind an injected key-value store, plus the
// orchestration that feeds them to the matching engine.

pub mod defaults;
pub mod handlers;
pub mod service;
pub mod store;
