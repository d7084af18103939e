pub mod colors;
pub mod dump;
