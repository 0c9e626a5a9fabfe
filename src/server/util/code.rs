//! Random code generation.

use rand::Rng;

const REFERRAL_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const HEX_CHARSET: &[u8] = b"0123456789ABCDEF";

fn random_from(charset: &[u8], len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

/// 6 character `[A-Z0-9]` referral code.
pub fn referral_code() -> String {
    random_from(REFERRAL_CHARSET, 6)
}

/// 8 character uppercase hex code placed in a channel description.
pub fn channel_verification_code() -> String {
    random_from(HEX_CHARSET, 8)
}

/// 6 digit numeric code for email recovery.
pub fn email_code() -> String {
    rand::rng().random_range(100_000..1_000_000).to_string()
}
