pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod router;
