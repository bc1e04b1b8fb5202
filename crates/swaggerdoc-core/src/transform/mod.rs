pub mod grouping;
pub mod method;

pub use grouping::{GroupLabel, Groups, Operation, check_tags, group_operations};
pub use method::{BuildOptions, build_method};
