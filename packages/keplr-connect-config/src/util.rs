use url::Url;

use crate::error::{ConfigError, Result};

pub fn set_port_in_url(input_url: &str, new_port: u16) -> Result<String> {
    // urls without a scheme are parsed as http and written back without one
    let has_scheme = input_url.contains("://");
    let url_with_scheme = if has_scheme {
        input_url.to_string()
    } else {
        format!("http://{input_url}")
    };

    let mut url =
        Url::parse(&url_with_scheme).map_err(|e| ConfigError::invalid_url(input_url, e))?;

    url.set_port(Some(new_port))
        .map_err(|_| ConfigError::invalid_url(input_url, "url cannot carry a port"))?;

    let final_url = if has_scheme {
        url.to_string()
    } else {
        url[url::Position::BeforeHost..].to_string()
    };

    Ok(final_url)
}

pub fn check_url(field: &str, value: &str) -> Result<()> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::invalid_url(field, e))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn replaces_existing_port() {
        assert_eq!(
            set_port_in_url("http://localhost:26657", 1317).unwrap(),
            "http://localhost:1317/"
        );
    }

    #[test]
    fn adds_port_without_scheme() {
        assert_eq!(
            set_port_in_url("rpc.example.com", 1317).unwrap(),
            "rpc.example.com:1317/"
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(check_url("rpc_endpoint", "not a url").is_err());
        assert!(check_url("rpc_endpoint", "https://rpc.example.com").is_ok());
    }
}
