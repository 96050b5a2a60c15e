mod chain_info;
mod error;
pub mod mock;
mod provider;

pub use chain_info::*;
pub use error::*;
pub use provider::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;
