use crate::store::UserInfo;

pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const CONNECTING_LABEL: &str = "Connecting...";
pub const DISCONNECT_LABEL: &str = "Disconnect";

/// First 6 and last 4 characters, e.g. `human1...0xyz`.
/// Short addresses overlap rather than panic.
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let head: String = address.chars().take(6).collect();
    let count = address.chars().count();
    let tail: String = address.chars().skip(count.saturating_sub(4)).collect();

    format!("{head}...{tail}")
}

/// What the component shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletView {
    pub body: WalletViewBody,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletViewBody {
    Connect {
        label: &'static str,
        disabled: bool,
    },
    Connected {
        address: String,
        disconnect_label: &'static str,
    },
}

impl WalletView {
    pub fn new(user_info: &UserInfo, is_loading: bool, error: &str) -> Self {
        let body = if user_info.connected {
            WalletViewBody::Connected {
                address: format_address(&user_info.address),
                disconnect_label: DISCONNECT_LABEL,
            }
        } else {
            WalletViewBody::Connect {
                label: if is_loading {
                    CONNECTING_LABEL
                } else {
                    CONNECT_LABEL
                },
                disabled: is_loading,
            }
        };

        Self {
            body,
            error: (!error.is_empty()).then(|| error.to_string()),
        }
    }
}

impl std::fmt::Display for WalletView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            WalletViewBody::Connect { label, disabled } => {
                write!(f, "[{label}]")?;
                if *disabled {
                    write!(f, " (disabled)")?;
                }
            }
            WalletViewBody::Connected {
                address,
                disconnect_label,
            } => {
                write!(f, "{address} [{disconnect_label}]")?;
            }
        }

        if let Some(error) = &self.error {
            write!(f, "\n{error}")?;
        }

        Ok(())
    }
}
