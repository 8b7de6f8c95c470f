//! Identifier synthesis for rows that come without one.
//!
//! Per-country place tables carry no key, so each aggregated destination gets
//! an id of the form `{slug}-{position}-{suffix}` with a 9-character suffix.

use rand::Rng;
use sha2::{Digest, Sha256};
use std::str::FromStr;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How the id suffix is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowIdMode {
    /// Random base-36 suffix. Ids differ between requests.
    #[default]
    Random,
    /// Suffix derived from `(slug, position, name)`. Ids repeat while the data does.
    Stable,
}

impl RowIdMode {
    /// Builds an id for the row at `position` of the source `slug`.
    pub fn synthesize(self, slug: &str, position: u64, name: &str) -> String {
        let suffix = match self {
            RowIdMode::Random => random_suffix(),
            RowIdMode::Stable => stable_suffix(slug, position, name),
        };
        format!("{slug}-{position}-{suffix}")
    }
}

impl FromStr for RowIdMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(RowIdMode::Random),
            "stable" => Ok(RowIdMode::Stable),
            other => Err(format!("unknown id mode '{other}', expected 'random' or 'stable'")),
        }
    }
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

fn stable_suffix(slug: &str, position: u64, name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(slug.as_bytes());
    hasher.update([0]);
    hasher.update(position.to_be_bytes());
    hasher.update(name.as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(SUFFIX_LEN);
    digest
}
