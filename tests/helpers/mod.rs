#![allow(unused_imports)]
pub mod post_helpers;
pub mod test_db;

pub use post_helpers::*;
pub use test_db::*;
