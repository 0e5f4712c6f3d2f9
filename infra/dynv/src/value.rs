use crate::error::DynvError;
use std::any::{Any, type_name};
use std::fmt;
use std::sync::{Arc, Weak};
use tinct_domain::Color;

/// The kinds of values a handler can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int32,
    Float,
    Color,
    Ptr,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int32 => "int32",
            Self::Float => "float",
            Self::Color => "color",
            Self::Ptr => "ptr",
        };
        f.write_str(name)
    }
}

/// A run-time typed property value.
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    Int32(i32),
    Float(f32),
    Color(Color),
    Ptr(Pointer),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Int32(_) => ValueKind::Int32,
            Self::Float(_) => ValueKind::Float,
            Self::Color(_) => ValueKind::Color,
            Self::Ptr(_) => ValueKind::Ptr,
        }
    }
}

/// Floats compare by bit pattern, so a stored NaN equals the value read back.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Color(a), Self::Color(b)) => color_bits(*a) == color_bits(*b),
            (Self::Ptr(a), Self::Ptr(b)) => a.same_target(b),
            _ => false,
        }
    }
}

fn color_bits(color: Color) -> [u32; 3] {
    color.channels().map(f32::to_bits)
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Pointer> for Value {
    fn from(value: Pointer) -> Self {
        Self::Ptr(value)
    }
}

/// A non-owning reference to a subsystem published into a store.
///
/// Holding a `Pointer` never keeps the target alive; whoever created the target
/// stays responsible for its lifetime. Reads after the target is gone fail with
/// [`DynvError::Expired`].
#[derive(Clone)]
pub struct Pointer {
    target: Weak<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Pointer {
    #[must_use]
    pub fn new<T: Any + Send + Sync>(target: &Arc<T>) -> Self {
        let target: Weak<T> = Arc::downgrade(target);
        Self { target, type_name: type_name::<T>() }
    }

    /// A pointer that refers to nothing; every upgrade fails with [`DynvError::Expired`].
    #[must_use]
    pub fn dangling() -> Self {
        let target: Weak<()> = Weak::new();
        Self { target, type_name: type_name::<()>() }
    }

    /// Name of the concrete type the pointer was created from.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    #[must_use]
    pub fn same_target(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.target, &other.target)
    }

    /// Upgrades to a strong handle of the concrete type `T`.
    ///
    /// # Errors
    /// Returns [`DynvError::Expired`] if the target was dropped, or
    /// [`DynvError::TypeMismatch`] if it is not a `T`.
    pub fn upgrade<T: Any + Send + Sync>(&self) -> Result<Arc<T>, DynvError> {
        let target = self.target.upgrade().ok_or_else(|| DynvError::Expired {
            message: self.type_name.into(),
            context: None,
        })?;

        target.downcast::<T>().map_err(|_| DynvError::TypeMismatch {
            message: format!("Expected {} but found {}", type_name::<T>(), self.type_name).into(),
            context: None,
        })
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pointer")
            .field("type_name", &self.type_name)
            .field("alive", &self.is_alive())
            .finish()
    }
}
