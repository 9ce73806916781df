pub mod errors;
pub mod score;
