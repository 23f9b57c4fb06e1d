pub mod campaign;
pub mod candidate;
