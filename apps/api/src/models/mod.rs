pub mod lesson;
pub mod module;
