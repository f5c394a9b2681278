//! Relational schema for the catalog: SeaORM entities, connection helpers and
//! thin insert/query functions used by the database-backed repositories.

pub mod errors;
pub mod db;
pub mod category;
pub mod product;

#[cfg(test)]
mod tests;
