//! Name-to-kernel registry.
//!
//! The registry is built once and passed into the harness by reference, so
//! tests can swap in fake kernels without touching process-wide state.

use std::fmt;

use crate::sieves::{SieveAlgorithm, SieveKind};

struct RegistryEntry {
    name: String,
    algorithm: Box<dyn SieveAlgorithm>,
}

/// Immutable, insertion-ordered mapping from algorithm name to kernel.
#[derive(Default)]
pub struct AlgorithmRegistry {
    entries: Vec<RegistryEntry>,
}

impl AlgorithmRegistry {
    /// The two built-in sieves, Eratosthenes first.
    pub fn standard() -> Self {
        SieveKind::ALL
            .into_iter()
            .fold(Self::builder(), |builder, kind| {
                builder.with_algorithm(kind.display_name(), kind.build())
            })
            .build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Exact-match lookup. Unknown names are not an error here.
    pub fn get(&self, name: &str) -> Option<&dyn SieveAlgorithm> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.algorithm.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn SieveAlgorithm)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.algorithm.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Builder for [`AlgorithmRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    /// Register `algorithm` under `name`.
    ///
    /// Re-registering a name replaces the kernel but keeps its original position.
    pub fn with_algorithm(
        mut self,
        name: impl Into<String>,
        algorithm: Box<dyn SieveAlgorithm>,
    ) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.algorithm = algorithm,
            None => self.entries.push(RegistryEntry { name, algorithm }),
        }
        self
    }

    pub fn build(self) -> AlgorithmRegistry {
        AlgorithmRegistry {
            entries: self.entries,
        }
    }
}
