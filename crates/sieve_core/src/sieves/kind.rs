use std::fmt;
use std::str::FromStr;

use super::algorithm::SieveAlgorithm;
use super::atkin::SieveOfAtkin;
use super::eratosthenes::SieveOfEratosthenes;

/// The built-in sieve kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SieveKind {
    Eratosthenes,
    Atkin,
}

impl SieveKind {
    /// Every built-in kernel, in registry order.
    pub const ALL: [SieveKind; 2] = [SieveKind::Eratosthenes, SieveKind::Atkin];

    pub fn display_name(self) -> &'static str {
        match self {
            SieveKind::Eratosthenes => SieveOfEratosthenes::NAME,
            SieveKind::Atkin => SieveOfAtkin::NAME,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            SieveKind::Eratosthenes => "eratosthenes",
            SieveKind::Atkin => "atkin",
        }
    }

    pub fn build(self) -> Box<dyn SieveAlgorithm> {
        match self {
            SieveKind::Eratosthenes => Box::new(SieveOfEratosthenes),
            SieveKind::Atkin => Box::new(SieveOfAtkin),
        }
    }
}

impl fmt::Display for SieveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sieve `{0}` (expected one of: eratosthenes, atkin)")]
pub struct ParseSieveKindError(pub String);

impl FromStr for SieveKind {
    type Err = ParseSieveKindError;

    /// Accepts either the display name or the short name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SieveKind::ALL
            .into_iter()
            .find(|kind| {
                needle.eq_ignore_ascii_case(kind.display_name())
                    || needle.eq_ignore_ascii_case(kind.short_name())
            })
            .ok_or_else(|| ParseSieveKindError(s.to_string()))
    }
}
