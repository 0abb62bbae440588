//! SeaORM entities mirroring the tables created by the migration tool.

pub mod post;
pub mod user;
