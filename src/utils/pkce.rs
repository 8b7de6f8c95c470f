//! PKCE verifier and challenge generation for the OAuth code flow.

use base64::Engine as _;
use rand::Rng;
use rand::distr::Alphanumeric;
use sha2::{Digest, Sha256};

/// Verifier length; RFC 7636 allows 43 to 128 characters.
const VERIFIER_LEN: usize = 64;

/// Generates a random alphanumeric code verifier.
pub fn generate_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(VERIFIER_LEN)
        .map(char::from)
        .collect()
}

/// Computes the S256 challenge: URL-safe base64 of SHA-256, without padding.
pub fn challenge_for(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
}
