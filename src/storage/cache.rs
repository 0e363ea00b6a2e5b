//! Process-wide holdings cache
//!
//! The decrypted table is expensive to produce and never changes during a
//! run. [`SharedTable`] holds it behind an `Arc`: the first caller loads it,
//! every later caller gets the same handle. Loading is serialized by a mutex
//! so the loader runs at most once per successful initialization. A failed
//! load leaves the cache empty.

use std::sync::{Arc, Mutex, OnceLock};

use crate::error::HoldingsResult;
use crate::models::HoldingsTable;

/// Once-initialized, read-only shared table
#[derive(Debug, Default)]
pub struct SharedTable {
    table: OnceLock<Arc<HoldingsTable>>,
    init: Mutex<()>,
}

impl SharedTable {
    pub const fn new() -> Self {
        Self {
            table: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// The cached table, if loaded
    pub fn get(&self) -> Option<Arc<HoldingsTable>> {
        self.table.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Return the cached table, running `load` if nothing is cached yet
    pub fn get_or_load<F>(&self, load: F) -> HoldingsResult<Arc<HoldingsTable>>
    where
        F: FnOnce() -> HoldingsResult<HoldingsTable>,
    {
        if let Some(table) = self.table.get() {
            return Ok(Arc::clone(table));
        }

        // A poisoned lock only means an earlier loader panicked; the cell
        // itself is still consistent.
        let _guard = self.init.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(table) = self.table.get() {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load()?);
        log::info!("Cached holdings table with {} rows", table.len());
        Ok(Arc::clone(self.table.get_or_init(|| table)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HoldingsError;
    use crate::models::{InvestmentRecord, Money};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn sample() -> HoldingsTable {
        HoldingsTable::new(vec![InvestmentRecord::new(
            "Aarhus Kommune",
            "Novo Nordisk B",
            Money::from_kroner(1),
        )])
    }

    #[test]
    fn test_loads_once() {
        let cache = SharedTable::new();
        let calls = AtomicUsize::new(0);

        let first = cache
            .get_or_load(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(sample())
            })
            .unwrap();
        let second = cache
            .get_or_load(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(HoldingsTable::default())
            })
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_failed_load_can_retry() {
        let cache = SharedTable::new();

        let err = cache
            .get_or_load(|| Err(HoldingsError::Decryption("bad key".into())))
            .unwrap_err();
        assert!(matches!(err, HoldingsError::Decryption(_)));
        assert!(!cache.is_loaded());

        let table = cache.get_or_load(|| Ok(sample())).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_concurrent_first_access_single_writer() {
        static CACHE: SharedTable = SharedTable::new();
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    CACHE
                        .get_or_load(|| {
                            CALLS.fetch_add(1, Ordering::SeqCst);
                            Ok(sample())
                        })
                        .unwrap()
                })
            })
            .collect();

        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
        assert!(tables.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
