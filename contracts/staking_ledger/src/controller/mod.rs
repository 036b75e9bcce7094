pub mod admin;
pub mod stake;
pub mod token;
