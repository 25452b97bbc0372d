//! Processor registry and factory.
//!
//! Lets the config layer and the CLI create processors from the ids used in
//! presets and on the command line.
//!
//! ```rust
//! use transito_dynamics::registry::{ProcessorRegistry, ProcessorKind};
//!
//! let registry = ProcessorRegistry::new();
//! for desc in registry.all_processors() {
//!     println!("{}: {}", desc.id, desc.description);
//! }
//!
//! let comp = registry.create("compressor").unwrap();
//! assert_eq!(comp.processor_param_count(), 9);
//! assert_eq!(ProcessorKind::from_id("transient_splitter"), Some(ProcessorKind::TransientSplitter));
//! ```

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use transito_core::ProcessorWithParams;

use crate::{Compressor, TransientSplitter};

/// The built-in processor types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorKind {
    /// [`Compressor`]
    Compressor,
    /// [`TransientSplitter`]
    TransientSplitter,
}

impl ProcessorKind {
    /// Every kind, in listing order.
    pub const ALL: [ProcessorKind; 2] = [ProcessorKind::Compressor, ProcessorKind::TransientSplitter];

    /// Stable id used in presets.
    pub const fn id(self) -> &'static str {
        match self {
            ProcessorKind::Compressor => "compressor",
            ProcessorKind::TransientSplitter => "transient_splitter",
        }
    }

    /// Kind for a preset id. Matching ignores ASCII case and accepts `-`
    /// for `_`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            let want = kind.id();
            want.len() == id.len()
                && want
                    .bytes()
                    .zip(id.bytes())
                    .all(|(a, b)| a == b.to_ascii_lowercase() || (a == b'_' && b == b'-'))
        })
    }
}

/// Describes a processor in the registry.
#[derive(Debug, Clone)]
pub struct ProcessorDescriptor {
    /// Processor type.
    pub kind: ProcessorKind,
    /// Unique identifier (lowercase snake_case).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Brief description.
    pub description: &'static str,
    /// Number of parameters.
    pub param_count: usize,
}

type ProcessorFactory = fn() -> Box<dyn ProcessorWithParams + Send>;

struct RegistryEntry {
    descriptor: ProcessorDescriptor,
    factory: ProcessorFactory,
}

/// Registry of the available dynamics processors.
pub struct ProcessorRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorRegistry {
    /// Create a registry with all built-in processors.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(ProcessorKind::ALL.len()),
        };
        registry.register(
            ProcessorDescriptor {
                kind: ProcessorKind::Compressor,
                id: ProcessorKind::Compressor.id(),
                name: "Compressor",
                description: "Soft-knee compressor/expander with auto make-up gain",
                param_count: 9,
            },
            || Box::new(Compressor::new()),
        );
        registry.register(
            ProcessorDescriptor {
                kind: ProcessorKind::TransientSplitter,
                id: ProcessorKind::TransientSplitter.id(),
                name: "Transient Splitter",
                description: "Separate gains for attack and sustain portions",
                param_count: 6,
            },
            || Box::new(TransientSplitter::new()),
        );
        registry
    }

    fn register(&mut self, descriptor: ProcessorDescriptor, factory: ProcessorFactory) {
        self.entries.push(RegistryEntry {
            descriptor,
            factory,
        });
    }

    /// Descriptors for all registered processors.
    pub fn all_processors(&self) -> Vec<&ProcessorDescriptor> {
        self.entries.iter().map(|e| &e.descriptor).collect()
    }

    /// Descriptor by id.
    pub fn get(&self, id: &str) -> Option<&ProcessorDescriptor> {
        let kind = ProcessorKind::from_id(id)?;
        self.entries
            .iter()
            .find(|e| e.descriptor.kind == kind)
            .map(|e| &e.descriptor)
    }

    /// Create a processor by id, or `None` for an unknown id.
    pub fn create(&self, id: &str) -> Option<Box<dyn ProcessorWithParams + Send>> {
        let kind = ProcessorKind::from_id(id)?;
        self.entries
            .iter()
            .find(|e| e.descriptor.kind == kind)
            .map(|e| (e.factory)())
    }

    /// Number of registered processors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Create a processor of the given kind with default parameters.
pub fn create_processor(kind: ProcessorKind) -> Box<dyn ProcessorWithParams + Send> {
    match kind {
        ProcessorKind::Compressor => Box::new(Compressor::new()),
        ProcessorKind::TransientSplitter => Box::new(TransientSplitter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_all_kinds() {
        let registry = ProcessorRegistry::new();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        let ids: Vec<_> = registry.all_processors().iter().map(|d| d.id).collect();
        assert_eq!(ids, ["compressor", "transient_splitter"]);
    }

    #[test]
    fn test_descriptor_param_counts_match() {
        let registry = ProcessorRegistry::new();
        for desc in registry.all_processors() {
            let processor = create_processor(desc.kind);
            assert_eq!(processor.processor_param_count(), desc.param_count, "{}", desc.id);
        }
    }

    #[test]
    fn test_from_id_is_lenient() {
        assert_eq!(ProcessorKind::from_id("Compressor"), Some(ProcessorKind::Compressor));
        assert_eq!(
            ProcessorKind::from_id("transient-splitter"),
            Some(ProcessorKind::TransientSplitter)
        );
        assert_eq!(ProcessorKind::from_id("limiter"), None);
        assert_eq!(ProcessorKind::from_id(""), None);
    }

    #[test]
    fn test_create_unknown_is_none() {
        let registry = ProcessorRegistry::new();
        assert!(registry.create("reverb").is_none());
        assert!(registry.get("reverb").is_none());
    }

    #[test]
    fn test_created_processor_finds_params() {
        let registry = ProcessorRegistry::new();
        let mut splitter = registry.create("transient_splitter").unwrap();
        let index = splitter.processor_find_param("sustain").unwrap();
        splitter.processor_set_param(index, 0.25);
        assert_eq!(splitter.processor_get_param(index), 0.25);
    }
}
