//! Rule tables and stylesheet generation.

pub mod generator;
pub mod rules;

pub use generator::generate_stylesheet;
pub use rules::{rule_groups, Declaration, Property, RuleGroup};
