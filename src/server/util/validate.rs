use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::AppError;

static WALLET_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("wallet address regex"));

pub fn is_wallet_address(address: &str) -> bool {
    WALLET_ADDRESS.is_match(address)
}

/// Rejects anything that is not a `0x` prefixed 40 digit hex address.
pub fn require_wallet_address(address: &str) -> Result<(), AppError> {
    if is_wallet_address(address) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Invalid wallet address format".to_string(),
        ))
    }
}
