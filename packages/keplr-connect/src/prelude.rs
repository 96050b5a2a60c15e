pub use crate::{
    format_address, ConnectError, UserAction, UserInfo, UserInfoStore, UserStore, WalletConnect,
    WalletView, WalletViewBody,
};
pub use keplr_connect_config::{ChainConfig, ChainId, GasPriceStep};
pub use keplr_connect_wallet::{
    mock::MockWallet, AccountData, KeplrChainInfo, KeplrError, OfflineSigner, WalletProvider,
};

#[cfg(feature = "web")]
pub use keplr_connect_wallet::Keplr;
