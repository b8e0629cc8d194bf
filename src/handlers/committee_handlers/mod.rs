pub mod forms;
pub mod list;
pub mod members;
