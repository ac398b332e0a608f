pub mod attributes;
pub mod naming;
