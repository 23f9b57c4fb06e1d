// Synthetic candidate generation.
// Catalog tables and policy functions feed a pure generator; the generator
// hands each batch to the storage manager. No network calls happen here.

pub mod catalog;
pub mod catalog_data;
pub mod compensation;
pub mod generator;
pub mod handlers;
pub mod match_score;
pub mod narrative;
pub mod policy;
pub mod portfolio;
pub mod random;
pub mod skills;
