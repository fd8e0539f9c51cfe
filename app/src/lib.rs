pub mod error;
pub mod route;

pub use route::app;
