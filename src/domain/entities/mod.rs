pub mod post;
pub mod tag;

pub use post::*;
pub use tag::*;
