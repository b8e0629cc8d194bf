pub mod committee;
pub mod meeting;
pub mod project;
