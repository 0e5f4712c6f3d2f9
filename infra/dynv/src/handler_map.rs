use crate::handler::{
    ColorHandler, FloatHandler, Int32Handler, PtrHandler, StringHandler, ValueHandler,
};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Registry of value handlers, keyed by type tag.
///
/// Cloning is cheap and yields another handle to the same registry. Every store
/// created against a registry keeps its own handle, so the registry is only freed
/// once the last store and the composition root have both released it.
#[derive(Debug, Clone, Default)]
pub struct HandlerMap {
    handlers: Arc<RwLock<FxHashMap<String, Arc<dyn ValueHandler>>>>,
}

impl HandlerMap {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the `string`, `int32`, `float`, `color` and `ptr` handlers.
    #[must_use]
    pub fn with_builtin_handlers() -> Self {
        let map = Self::new();
        map.add_handler(StringHandler);
        map.add_handler(Int32Handler);
        map.add_handler(ColorHandler);
        map.add_handler(PtrHandler);
        map.add_handler(FloatHandler);
        map
    }

    /// Registers `handler` under its tag.
    ///
    /// Re-registering a tag replaces the previous handler, which is returned.
    /// Values already stored keep the handler they were inserted with.
    pub fn add_handler<H: ValueHandler + 'static>(&self, handler: H) -> Option<Arc<dyn ValueHandler>> {
        self.add_shared(Arc::new(handler))
    }

    /// Same as [`HandlerMap::add_handler`] for an already shared handler.
    pub fn add_shared(&self, handler: Arc<dyn ValueHandler>) -> Option<Arc<dyn ValueHandler>> {
        let tag = handler.tag().to_owned();
        let previous = self.handlers.write().insert(tag.clone(), handler);
        if previous.is_some() {
            debug!(tag = %tag, "Value handler replaced");
        }
        previous
    }

    #[must_use]
    pub fn handler(&self, tag: &str) -> Option<Arc<dyn ValueHandler>> {
        self.handlers.read().get(tag).cloned()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.read().contains_key(tag)
    }

    /// Registered tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.handlers.read().keys().cloned().collect();
        tags.sort_unstable();
        tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    /// Releases this handle. Returns `true` if it was the last one and the
    /// registry has been freed.
    pub fn release(self) -> bool {
        Arc::into_inner(self.handlers).is_some()
    }
}
