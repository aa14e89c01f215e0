use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::generator::{RouteGenerator, DEFAULT_SEED};
use crate::types::airport::SourceAirport;
use crate::types::flight::FlightTable;
use crate::types::gen_error::GenError;

/// Memoizes generated tables per source airport.
///
/// Tables are pure functions of the source airport once the generator and seed
/// are fixed, so a cached table never goes stale. Clones share the same tables.
#[derive(Clone)]
pub struct RouteCache {
    generator: RouteGenerator,
    seed: u64,
    tables: Arc<RwLock<HashMap<SourceAirport, Arc<FlightTable>>>>,
}

impl RouteCache {
    pub fn new(generator: RouteGenerator, seed: u64) -> Self {
        RouteCache {
            generator,
            seed,
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the table of `source`, generating it on first use.
    pub fn get_or_generate(&self, source: SourceAirport) -> Result<Arc<FlightTable>, GenError> {
        {
            let tables = self
                .tables
                .read()
                .map_err(|_| GenError::CacheLock("Failed to read route tables".to_string()))?;
            if let Some(table) = tables.get(&source) {
                return Ok(Arc::clone(table));
            }
        }

        let table = Arc::new(self.generator.generate_seeded(source, self.seed));

        let mut tables = self
            .tables
            .write()
            .map_err(|_| GenError::CacheLock("Failed to lock route tables".to_string()))?;
        Ok(Arc::clone(tables.entry(source).or_insert(table)))
    }

    pub fn len(&self) -> Result<usize, GenError> {
        self.tables
            .read()
            .map(|tables| tables.len())
            .map_err(|_| GenError::CacheLock("Failed to read route tables".to_string()))
    }

    pub fn is_empty(&self) -> Result<bool, GenError> {
        Ok(self.len()? == 0)
    }

    /// Drops every cached table.
    pub fn clear(&self) -> Result<(), GenError> {
        self.tables
            .write()
            .map(|mut tables| tables.clear())
            .map_err(|_| GenError::CacheLock("Failed to lock route tables".to_string()))
    }
}

impl Default for RouteCache {
    fn default() -> Self {
        RouteCache::new(RouteGenerator::standard(), DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use std::thread;

    #[test]
    fn test_repeated_source_returns_same_table() {
        let cache = RouteCache::default();
        let first = cache.get_or_generate(SourceAirport::Mia).unwrap();
        let second = cache.get_or_generate(SourceAirport::Mia).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len().unwrap(), 1);
        assert_eq!(*first, generate("MIA").unwrap());
    }

    #[test]
    fn test_clear_and_regenerate() {
        let cache = RouteCache::default();
        let before = cache.get_or_generate(SourceAirport::Bos).unwrap();
        cache.get_or_generate(SourceAirport::Phl).unwrap();
        assert_eq!(cache.len().unwrap(), 2);

        cache.clear().unwrap();
        assert!(cache.is_empty().unwrap());

        let after = cache.get_or_generate(SourceAirport::Bos).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before, after);
    }

    #[test]
    fn test_clones_share_tables_across_threads() {
        let cache = RouteCache::default();
        let handles: Vec<_> = SourceAirport::ALL
            .iter()
            .map(|&source| {
                let cache = cache.clone();
                thread::spawn(move || cache.get_or_generate(source).map(|t| t.len()))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().unwrap() > 0);
        }
        assert_eq!(cache.len().unwrap(), SourceAirport::ALL.len());
    }
}
