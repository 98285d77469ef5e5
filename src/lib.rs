pub mod config;
pub mod error;
pub mod gallery;
pub mod model;
pub mod pool;
pub mod select;
pub mod update;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
