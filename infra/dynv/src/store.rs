use crate::error::{DynvError, DynvErrorExt};
use crate::handler::ValueHandler;
use crate::handler_map::HandlerMap;
use crate::value::{Pointer, Value, ValueKind};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;
use tinct_domain::Color;
use tinct_domain::constants::{TAG_COLOR, TAG_FLOAT, TAG_INT32, TAG_PTR, TAG_STRING};
use tracing::trace;

#[derive(Debug)]
struct Entry {
    handler: Arc<dyn ValueHandler>,
    value: Value,
}

impl Entry {
    fn destroy(self) {
        // Pointer values never own their target.
        if self.value.kind() != ValueKind::Ptr {
            self.handler.destroy(self.value);
        }
    }
}

#[derive(Debug)]
struct StoreInner {
    handlers: HandlerMap,
    entries: RwLock<FxHashMap<String, Entry>>,
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        let entries = std::mem::take(self.entries.get_mut());
        trace!(count = entries.len(), "Destroying property store");
        entries.into_values().for_each(Entry::destroy);
    }
}

/// One serializable property in its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedEntry {
    pub tag: String,
    pub name: String,
    pub text: String,
}

/// Named, run-time typed properties.
///
/// Every value is stored together with the handler that accepted it. Cloning
/// yields another holder of the same store; the values are destroyed exactly once,
/// when the last holder is released or dropped.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Creates a store against `handlers`. The store keeps its own handle to the registry.
    ///
    /// # Errors
    /// Returns [`DynvError::InvalidRegistry`] if the registry has no handlers.
    pub fn new(handlers: &HandlerMap) -> Result<Self, DynvError> {
        if handlers.is_empty() {
            return Err(DynvError::InvalidRegistry {
                message: "No value handlers registered".into(),
                context: None,
            });
        }

        Ok(Self {
            inner: Arc::new(StoreInner {
                handlers: handlers.clone(),
                entries: RwLock::new(FxHashMap::default()),
            }),
        })
    }

    /// The handler registry this store resolves tags against.
    #[must_use]
    pub fn handlers(&self) -> &HandlerMap {
        &self.inner.handlers
    }

    /// Inserts or overwrites the property `name` under the type tag `tag`.
    ///
    /// An overwritten value is destroyed through the handler it was stored with.
    ///
    /// # Errors
    /// Returns [`DynvError::UnknownType`] if no handler is registered for `tag`, or
    /// [`DynvError::TypeMismatch`] if the handler rejects the value.
    pub fn set(&self, tag: &str, name: &str, value: impl Into<Value>) -> Result<(), DynvError> {
        let value = value.into();
        let handler = self.resolve(tag)?;

        if !handler.accepts(&value) {
            return Err(DynvError::TypeMismatch {
                message: format!("Handler '{tag}' does not accept a {} value", value.kind()).into(),
                context: Some(name.to_owned().into()),
            });
        }

        let previous = self.inner.entries.write().insert(name.to_owned(), Entry { handler, value });
        trace!(tag, name, replaced = previous.is_some(), "Property set");

        if let Some(previous) = previous {
            previous.destroy();
        }
        Ok(())
    }

    /// Returns a copy of the property `name`, which must be stored under `tag`.
    ///
    /// # Errors
    /// * [`DynvError::UnknownType`] if no handler is registered for `tag`.
    /// * [`DynvError::NotFound`] if no property named `name` exists.
    /// * [`DynvError::TypeMismatch`] if `name` is stored under another tag.
    pub fn get(&self, tag: &str, name: &str) -> Result<Value, DynvError> {
        self.resolve(tag)?;

        let entries = self.inner.entries.read();
        let entry = entries.get(name).ok_or_else(|| DynvError::NotFound {
            message: name.to_owned().into(),
            context: None,
        })?;

        if entry.handler.tag() != tag {
            return Err(DynvError::TypeMismatch {
                message: format!("Stored as '{}', requested as '{tag}'", entry.handler.tag()).into(),
                context: Some(name.to_owned().into()),
            });
        }

        Ok(entry.handler.copy(&entry.value))
    }

    /// Removes the property `name`, destroying its value. Returns `false` if it was absent.
    pub fn remove(&self, name: &str) -> bool {
        let removed = self.inner.entries.write().remove(name);
        trace!(name, removed = removed.is_some(), "Property removed");
        match removed {
            Some(entry) => {
                entry.destroy();
                true
            },
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.entries.read().contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.read().is_empty()
    }

    /// Number of live holders of this store, this one included.
    #[must_use]
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Releases this holder. Returns `true` if it was the last one, in which case
    /// every non-pointer value has been destroyed through its handler.
    pub fn release(self) -> bool {
        Arc::into_inner(self.inner).is_some()
    }

    /// Textual form of every serializable property, sorted by name.
    #[must_use]
    pub fn export(&self) -> Vec<ExportedEntry> {
        let mut exported: Vec<ExportedEntry> = self
            .inner
            .entries
            .read()
            .iter()
            .filter_map(|(name, entry)| {
                entry.handler.serialize(&entry.value).map(|text| ExportedEntry {
                    tag: entry.handler.tag().to_owned(),
                    name: name.clone(),
                    text,
                })
            })
            .collect();
        exported.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        exported
    }

    /// Parses `text` with the handler for `tag` and stores the result under `name`.
    ///
    /// # Errors
    /// Returns [`DynvError::UnknownType`] if no handler is registered for `tag`, or
    /// [`DynvError::Parse`] if the handler cannot read `text`.
    pub fn import(&self, tag: &str, name: &str, text: &str) -> Result<(), DynvError> {
        let handler = self.resolve(tag)?;
        let value = handler.deserialize(text).ok_or_else(|| DynvError::Parse {
            message: format!("'{text}' is not a valid '{tag}' value").into(),
            context: Some(name.to_owned().into()),
        })?;
        self.set(tag, name, value)
    }

    fn resolve(&self, tag: &str) -> Result<Arc<dyn ValueHandler>, DynvError> {
        self.inner.handlers.handler(tag).ok_or_else(|| DynvError::UnknownType {
            message: tag.to_owned().into(),
            context: None,
        })
    }
}

// --- Typed accessors ---

macro_rules! typed_accessors {
    ($($set:ident, $get:ident, $tag:expr, $variant:ident, $ty:ty;)*) => {
        impl Store {
            $(
                #[doc = concat!("Stores a `", stringify!($ty), "` under the `", stringify!($variant), "` handler.")]
                ///
                /// # Errors
                /// See [`Store::set`].
                pub fn $set(&self, name: &str, value: $ty) -> Result<(), DynvError> {
                    self.set($tag, name, Value::$variant(value))
                }

                #[doc = concat!("Reads a `", stringify!($ty), "` stored under the `", stringify!($variant), "` handler.")]
                ///
                /// # Errors
                /// See [`Store::get`].
                pub fn $get(&self, name: &str) -> Result<$ty, DynvError> {
                    match self.get($tag, name)? {
                        Value::$variant(value) => Ok(value),
                        other => Err(unexpected_kind(name, other.kind())),
                    }
                }
            )*
        }
    };
}

typed_accessors! {
    set_string, get_string, TAG_STRING, String, String;
    set_int32, get_int32, TAG_INT32, Int32, i32;
    set_float, get_float, TAG_FLOAT, Float, f32;
    set_color, get_color, TAG_COLOR, Color, Color;
}

impl Store {
    /// Publishes a non-owning reference to `target` under the `ptr` handler.
    ///
    /// # Errors
    /// See [`Store::set`].
    pub fn set_ptr<T: Any + Send + Sync>(&self, name: &str, target: &Arc<T>) -> Result<(), DynvError> {
        self.set(TAG_PTR, name, Pointer::new(target))
    }

    /// Resolves a published reference back to its concrete type.
    ///
    /// # Errors
    /// Besides the errors of [`Store::get`], returns [`DynvError::Expired`] if the
    /// target has been dropped and [`DynvError::TypeMismatch`] if it is not a `T`.
    pub fn get_ptr<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>, DynvError> {
        match self.get(TAG_PTR, name)? {
            Value::Ptr(pointer) => pointer.upgrade::<T>().context(name.to_owned()),
            other => Err(unexpected_kind(name, other.kind())),
        }
    }
}

fn unexpected_kind(name: &str, kind: ValueKind) -> DynvError {
    DynvError::TypeMismatch {
        message: format!("Handler produced a {kind} value").into(),
        context: Some(name.to_owned().into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct Counted {
        destroyed: Arc<AtomicUsize>,
    }

    impl ValueHandler for Counted {
        fn tag(&self) -> &str {
            "counted"
        }

        fn kind(&self) -> ValueKind {
            ValueKind::Int32
        }

        fn create(&self) -> Value {
            Value::Int32(0)
        }

        fn destroy(&self, _value: Value) {
            self.destroyed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counted_store() -> (Store, Arc<AtomicUsize>) {
        let destroyed = Arc::new(AtomicUsize::new(0));
        let handlers = HandlerMap::with_builtin_handlers();
        handlers.add_handler(Counted { destroyed: Arc::clone(&destroyed) });
        (Store::new(&handlers).unwrap(), destroyed)
    }

    #[test]
    fn empty_registry_is_rejected() {
        let err = Store::new(&HandlerMap::new()).unwrap_err();
        assert!(matches!(err, DynvError::InvalidRegistry { .. }));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let store = Store::new(&HandlerMap::with_builtin_handlers()).unwrap();

        let err = store.set("int64", "answer", 42_i32).unwrap_err();
        assert!(matches!(err, DynvError::UnknownType { .. }));
        assert!(store.is_empty());

        let err = store.get("int64", "answer").unwrap_err();
        assert!(matches!(err, DynvError::UnknownType { .. }));
    }

    #[test]
    fn value_of_wrong_kind_is_rejected() {
        let store = Store::new(&HandlerMap::with_builtin_handlers()).unwrap();
        let err = store.set(TAG_INT32, "answer", "forty-two").unwrap_err();
        assert!(matches!(err, DynvError::TypeMismatch { .. }));
    }

    #[test]
    fn lookups_distinguish_absent_from_mismatched() {
        let store = Store::new(&HandlerMap::with_builtin_handlers()).unwrap();
        store.set_int32("answer", 42).unwrap();

        assert_eq!(store.get_int32("answer").unwrap(), 42);
        assert!(matches!(store.get_float("answer"), Err(DynvError::TypeMismatch { .. })));
        assert!(matches!(store.get_int32("question"), Err(DynvError::NotFound { .. })));
    }

    #[test]
    fn last_writer_wins_across_tags() {
        let store = Store::new(&HandlerMap::with_builtin_handlers()).unwrap();
        store.set_int32("zoom", 2).unwrap();
        store.set_float("zoom", 2.5).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_float("zoom").unwrap(), 2.5);
        assert!(matches!(store.get_int32("zoom"), Err(DynvError::TypeMismatch { .. })));
    }

    #[test]
    fn nan_values_read_back_equal() {
        let store = Store::new(&HandlerMap::with_builtin_handlers()).unwrap();
        let color = Color { red: f32::NAN, green: 0.5, blue: 1.0 };
        store.set(TAG_FLOAT, "gamma", f32::NAN).unwrap();
        store.set(TAG_COLOR, "picked", color).unwrap();

        assert_eq!(store.get(TAG_FLOAT, "gamma").unwrap(), Value::Float(f32::NAN));
        assert_eq!(store.get(TAG_COLOR, "picked").unwrap(), Value::Color(color));
        assert_ne!(Value::Float(f32::NAN), Value::Float(-f32::NAN));
    }

    #[test]
    fn values_are_destroyed_once_by_last_holder() {
        let (store, destroyed) = counted_store();
        store.set("counted", "a", 1_i32).unwrap();
        store.set("counted", "b", 2_i32).unwrap();

        let other = store.clone();
        assert_eq!(store.holders(), 2);
        assert!(!store.release());
        assert_eq!(destroyed.load(Ordering::SeqCst), 0);

        assert!(other.release());
        assert_eq!(destroyed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn overwrite_and_remove_destroy_the_old_value() {
        let (store, destroyed) = counted_store();
        store.set("counted", "a", 1_i32).unwrap();
        store.set("counted", "a", 2_i32).unwrap();
        assert_eq!(destroyed.load(Ordering::SeqCst), 1);

        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert_eq!(destroyed.load(Ordering::SeqCst), 2);

        drop(store);
        assert_eq!(destroyed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn pointer_targets_outlive_the_store() {
        #[derive(Debug)]
        struct Converters(Vec<&'static str>);

        let converters = Arc::new(Converters(vec!["color_web_hex"]));
        let store = Store::new(&HandlerMap::with_builtin_handlers()).unwrap();
        store.set_ptr("Converters", &converters).unwrap();

        let resolved = store.get_ptr::<Converters>("Converters").unwrap();
        assert!(Arc::ptr_eq(&resolved, &converters));
        drop(resolved);

        assert!(store.release());
        assert_eq!(converters.0, ["color_web_hex"]);
        assert_eq!(Arc::strong_count(&converters), 1);
    }

    #[test]
    fn dead_pointer_target_is_reported() {
        let store = Store::new(&HandlerMap::with_builtin_handlers()).unwrap();
        let target = Arc::new(7_u8);
        store.set_ptr("Sampler", &target).unwrap();
        drop(target);

        let err = store.get_ptr::<u8>("Sampler").unwrap_err();
        assert!(matches!(err, DynvError::Expired { .. }));
        assert_eq!(err.context_str(), Some("Sampler"));
    }

    #[test]
    fn export_skips_pointers_and_import_parses() {
        let store = Store::new(&HandlerMap::with_builtin_handlers()).unwrap();
        let target = Arc::new(());
        store.set_ptr("Lua", &target).unwrap();
        store.set_string("name", "Tinct".to_owned()).unwrap();
        store.set_int32("zoom", 3).unwrap();

        let exported = store.export();
        let names: Vec<&str> = exported.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["name", "zoom"]);

        let copy = Store::new(store.handlers()).unwrap();
        for entry in &exported {
            copy.import(&entry.tag, &entry.name, &entry.text).unwrap();
        }
        assert_eq!(copy.get_string("name").unwrap(), "Tinct");
        assert_eq!(copy.get_int32("zoom").unwrap(), 3);

        let err = copy.import(TAG_INT32, "zoom", "three").unwrap_err();
        assert!(matches!(err, DynvError::Parse { .. }));
        assert_eq!(copy.get_int32("zoom").unwrap(), 3);
    }

    #[test]
    fn store_keeps_its_handler_registry_alive() {
        let handlers = HandlerMap::with_builtin_handlers();
        let store = Store::new(&handlers).unwrap();

        assert!(!handlers.release());
        store.set_int32("still", 1).unwrap();
        assert_eq!(store.get_int32("still").unwrap(), 1);
    }
}
