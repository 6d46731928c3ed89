//! The set of configurators available for generation.

use crate::retroarch::{BeetlePsx, BeetlePsxHw, PcsxRearmed};
use crate::{Configurator, EmuConfError};

/// Ordered collection of configurators, looked up by short name.
pub struct Registry {
    configurators: Vec<Box<dyn Configurator>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            configurators: Vec::new(),
        }
    }

    /// A registry holding every RetroArch core.
    pub fn retroarch() -> Self {
        let mut registry = Self::new();
        registry
            .register(PcsxRearmed::new())
            .register(BeetlePsx::new())
            .register(BeetlePsxHw::new());
        registry
    }

    pub fn register<C: Configurator + 'static>(&mut self, configurator: C) -> &mut Self {
        self.configurators.push(Box::new(configurator));
        self
    }

    pub fn configurators(&self) -> impl Iterator<Item = &dyn Configurator> {
        self.configurators.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.configurators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurators.is_empty()
    }

    /// Get a configurator by short name. Case-insensitive; `-` and `_` are
    /// interchangeable.
    pub fn get_by_short_name(&self, short_name: &str) -> Option<&dyn Configurator> {
        let wanted = canonical_name(short_name);
        self.configurators()
            .find(|c| canonical_name(c.short_name()) == wanted)
    }

    pub fn short_names(&self) -> Vec<&'static str> {
        self.configurators().map(|c| c.short_name()).collect()
    }

    /// Select configurators by name, in registry order. An empty list selects
    /// all of them.
    pub fn select<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<&dyn Configurator>, EmuConfError> {
        if names.is_empty() {
            return Ok(self.configurators().collect());
        }

        let mut wanted = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let configurator = self
                .get_by_short_name(name)
                .ok_or_else(|| EmuConfError::UnknownCore(name.to_string()))?;
            wanted.push(configurator.short_name());
        }

        Ok(self
            .configurators()
            .filter(|c| wanted.contains(&c.short_name()))
            .collect())
    }
}

fn canonical_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}
