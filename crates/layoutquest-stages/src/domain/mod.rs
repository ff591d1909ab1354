//! Stage machine and quiz building blocks.

pub mod machine;
pub mod quiz;
