pub mod contact;
pub mod error;
pub mod render;
