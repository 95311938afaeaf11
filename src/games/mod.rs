//! Concrete games built on the core types and rules.

pub mod twenty48;
