//! # Dynamic Values
//!
//! A registry of value handlers and a property store holding named, run-time typed values.
//!
//! ## Overview
//!
//! A [`HandlerMap`] maps type tags (`"string"`, `"int32"`, `"float"`, `"color"`, `"ptr"`, ...)
//! to [`ValueHandler`] implementations. A [`Store`] created against that registry only accepts
//! values whose tag has a handler, and always hands back a value of exactly the requested tag.
//!
//! ## Features
//!
//! * **Open handlers**: third parties register new tags or replace built-in ones.
//! * **Shared ownership**: stores and registries are cheap-to-clone handles; values are
//!   destroyed once, by the last holder.
//! * **Non-owning pointers**: the `ptr` kind publishes subsystems without keeping them alive.
//! * **Text form**: serializable kinds export to and import from strings.
//!
//! # Example
//!
//! ```rust
//! use tinct_dynv::{DynvError, HandlerMap, Store};
//!
//! # fn main() -> Result<(), DynvError> {
//! let handlers = HandlerMap::with_builtin_handlers();
//! let store = Store::new(&handlers)?;
//!
//! store.set_int32("zoom", 4)?;
//! assert_eq!(store.get_int32("zoom")?, 4);
//! assert!(matches!(store.get_string("zoom"), Err(DynvError::TypeMismatch { .. })));
//!
//! assert!(!handlers.release());
//! assert!(store.release());
//! # Ok(())
//! # }
//! ```

mod error;
mod handler;
mod handler_map;
mod store;
mod value;

pub use error::{DynvError, DynvErrorExt};
pub use handler::{ColorHandler, FloatHandler, Int32Handler, PtrHandler, StringHandler, ValueHandler};
pub use handler_map::HandlerMap;
pub use store::{ExportedEntry, Store};
pub use value::{Pointer, Value, ValueKind};

pub type Result<T, E = DynvError> = std::result::Result<T, E>;
