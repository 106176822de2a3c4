//! Vocabulary Cache
//!
//! Holds the vocabulary for a hosting process. Building it is linear in the
//! catalog size, so it is built once, shared as `Arc<Vocabulary>`, and only
//! rebuilt on an explicit [`VocabularyCache::invalidate`] or
//! [`VocabularyCache::reload`]. A reload swaps the whole vocabulary; readers
//! holding the previous `Arc` keep a consistent snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use super::catalog::{load_records, CatalogSource};
use super::error::{SpellError, SpellResult};
use super::vocabulary::Vocabulary;

/// Produces a fresh vocabulary, e.g. from catalog files.
pub trait VocabularyLoader: Send + Sync {
    fn load(&self) -> SpellResult<Vocabulary>;
}

impl<F> VocabularyLoader for F
where
    F: Fn() -> SpellResult<Vocabulary> + Send + Sync,
{
    fn load(&self) -> SpellResult<Vocabulary> {
        self()
    }
}

/// Builds the vocabulary from CSV catalog sources.
#[derive(Clone, Debug)]
pub struct CatalogLoader {
    sources: Vec<CatalogSource>,
}

impl CatalogLoader {
    pub fn new(sources: Vec<CatalogSource>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[CatalogSource] {
        &self.sources
    }
}

impl VocabularyLoader for CatalogLoader {
    fn load(&self) -> SpellResult<Vocabulary> {
        let records = load_records(&self.sources)?;
        Ok(Vocabulary::build(&records))
    }
}

/// Lazily built, explicitly invalidated vocabulary.
pub struct VocabularyCache {
    loader: Box<dyn VocabularyLoader>,
    current: RwLock<Option<Arc<Vocabulary>>>,
}

impl VocabularyCache {
    pub fn new(loader: impl VocabularyLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            current: RwLock::new(None),
        }
    }

    /// Cache backed by CSV catalog files.
    pub fn from_sources(sources: Vec<CatalogSource>) -> Self {
        Self::new(CatalogLoader::new(sources))
    }

    /// Cache pre-filled with a vocabulary; `reload` rebuilds through `loader`.
    pub fn with_vocabulary(loader: impl VocabularyLoader + 'static, vocabulary: Vocabulary) -> Self {
        Self {
            loader: Box::new(loader),
            current: RwLock::new(Some(Arc::new(vocabulary))),
        }
    }

    /// Current vocabulary, building it on first use.
    ///
    /// Fails with [`SpellError::VocabularyUnavailable`] when the loader
    /// cannot produce one.
    pub fn get(&self) -> SpellResult<Arc<Vocabulary>> {
        if let Some(vocabulary) = self.cached() {
            return Ok(vocabulary);
        }

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have built it while we waited for the lock
        if let Some(vocabulary) = current.as_ref() {
            return Ok(Arc::clone(vocabulary));
        }

        let vocabulary = Arc::new(self.load()?);
        *current = Some(Arc::clone(&vocabulary));
        Ok(vocabulary)
    }

    /// Current vocabulary without triggering a build.
    pub fn cached(&self) -> Option<Arc<Vocabulary>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    pub fn is_loaded(&self) -> bool {
        self.cached().is_some()
    }

    /// Drop the cached vocabulary; the next `get` rebuilds it.
    pub fn invalidate(&self) {
        log::info!("Vocabulary cache invalidated");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Rebuild now. On failure the previous vocabulary stays in place.
    pub fn reload(&self) -> SpellResult<Arc<Vocabulary>> {
        let vocabulary = Arc::new(self.load()?);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&vocabulary));
        Ok(vocabulary)
    }

    /// Install an externally built vocabulary.
    pub fn replace(&self, vocabulary: Vocabulary) -> Arc<Vocabulary> {
        let vocabulary = Arc::new(vocabulary);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&vocabulary));
        vocabulary
    }

    fn load(&self) -> SpellResult<Vocabulary> {
        let vocabulary = self.loader.load().map_err(|e| {
            log::error!("Vocabulary load failed: {}", e);
            SpellError::VocabularyUnavailable(e.to_string())
        })?;

        if vocabulary.is_empty() {
            log::warn!("Loaded vocabulary is empty; every token will be left unresolved");
        } else {
            log::info!(
                "Loaded vocabulary: {} tokens, {} occurrences",
                vocabulary.len(),
                vocabulary.total_occurrences()
            );
        }

        Ok(vocabulary)
    }
}

impl std::fmt::Debug for VocabularyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VocabularyCache")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
