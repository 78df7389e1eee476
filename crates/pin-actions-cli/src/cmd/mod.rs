pub mod pin;
pub mod workflows;
