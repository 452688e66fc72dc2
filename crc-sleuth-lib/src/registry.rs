//! The set of algorithms a search tries.

use crc_sleuth_core::{Algorithm, ByteChecksum};

use crate::error::SearchError;

/// Position of an algorithm inside an [`AlgorithmRegistry`].
///
/// Ids are only meaningful for the registry that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlgorithmId(pub(crate) usize);

impl AlgorithmId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Registry holding every algorithm the search enumerates.
///
/// Populated once before a search and only read afterwards. Enumeration
/// order is registration order, so repeated runs in one process see the
/// algorithms in the same order.
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn ByteChecksum>>,
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AlgorithmRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Registry with every built-in [`Algorithm`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &algorithm in Algorithm::all() {
            registry.register(algorithm);
        }
        registry
    }

    /// Registry with only the named built-in algorithms, in the given order.
    ///
    /// Names are resolved through `Algorithm`'s parser, so aliases work.
    pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Self, SearchError> {
        let mut registry = Self::new();
        for name in names {
            let algorithm: Algorithm = name.as_ref().parse()?;
            registry.register(algorithm);
        }
        if registry.is_empty() {
            return Err(SearchError::EmptyRegistry);
        }
        Ok(registry)
    }

    /// Register an algorithm. A name that is already taken is ignored.
    pub fn register<A: ByteChecksum + 'static>(&mut self, algorithm: A) -> &mut Self {
        if self.find(algorithm.name()).is_some() {
            log::warn!("Algorithm '{}' already registered, ignoring", algorithm.name());
            return self;
        }
        self.algorithms.push(Box::new(algorithm));
        self
    }

    /// Iterate over `(id, algorithm)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (AlgorithmId, &dyn ByteChecksum)> {
        self.algorithms
            .iter()
            .enumerate()
            .map(|(i, a)| (AlgorithmId(i), a.as_ref()))
    }

    /// Look up an algorithm by id.
    pub fn get(&self, id: AlgorithmId) -> Option<&dyn ByteChecksum> {
        self.algorithms.get(id.0).map(|a| a.as_ref())
    }

    /// Name of the algorithm with this id.
    ///
    /// Ids always come from this registry, so a miss is a caller bug and
    /// renders as `"?"` rather than panicking.
    pub fn name(&self, id: AlgorithmId) -> &str {
        self.get(id).map_or("?", |a| a.name())
    }

    /// Find an algorithm by its exact registered name.
    pub fn find(&self, name: &str) -> Option<AlgorithmId> {
        self.algorithms
            .iter()
            .position(|a| a.name() == name)
            .map(AlgorithmId)
    }

    /// Like [`find`](Self::find), but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<AlgorithmId, SearchError> {
        self.find(name)
            .ok_or_else(|| SearchError::unknown_algorithm(name))
    }

    /// All registered names.
    pub fn names(&self) -> Vec<&str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}
