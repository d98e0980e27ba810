pub mod algorithm;
pub mod atkin;
pub mod eratosthenes;
pub mod kind;
mod marker;

pub use algorithm::SieveAlgorithm;
pub use atkin::SieveOfAtkin;
pub use eratosthenes::SieveOfEratosthenes;
pub use kind::{ParseSieveKindError, SieveKind};
