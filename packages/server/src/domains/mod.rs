// Business domains
pub mod maps;
