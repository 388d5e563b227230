pub mod builders;
pub mod parsers;
