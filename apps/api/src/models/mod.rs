pub mod cv;
pub mod validation;
