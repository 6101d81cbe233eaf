pub mod config;
pub mod error;
pub mod loading;
pub mod navigation;

pub use config::*;
pub use error::*;
pub use loading::*;
pub use navigation::*;
