use keplr_connect_config::ChainId;
use thiserror::Error;

/// Failures coming from the wallet extension.
///
/// Messages produced by the wallet itself are carried and displayed verbatim,
/// since they are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeplrError {
    #[error("Please install Keplr extension")]
    NoExist,
    #[error("{0}")]
    FailedEnable(String),
    #[error("{0}")]
    NoSigner(String),
    #[error("keplr: no accounts for chain {0}")]
    NoAccounts(ChainId),
    #[error("{0}")]
    FailedSuggestChain(String),
    #[error("{0}")]
    Technical(String),
}

pub type Result<T> = std::result::Result<T, KeplrError>;
