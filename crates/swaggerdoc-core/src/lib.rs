pub mod config;
pub mod directive;
pub mod error;
pub mod fetch;
pub mod nodes;
pub mod parse;
pub mod transform;

pub use directive::{DirectiveContent, DirectiveOutput, SwaggerDirective};
pub use nodes::{Inline, Node, Table};
