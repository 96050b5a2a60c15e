mod connect;
mod error;
pub mod prelude;
mod store;
mod view;

pub use connect::*;
pub use error::*;
pub use store::*;
pub use view::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "web", target_arch = "wasm32"))] {
        mod dom;
        pub use dom::*;
    }
}

// for those who want the pieces directly
pub mod config {
    pub use keplr_connect_config::*;
}

pub mod wallet {
    pub use keplr_connect_wallet::*;
}
