use keplr_connect_wallet::KeplrError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    #[error(transparent)]
    Wallet(#[from] KeplrError),

    #[error("wallet connection already in progress")]
    InProgress,
}
