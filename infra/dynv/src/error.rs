use std::borrow::Cow;

/// Errors raised by the handler registry and the property store.
#[tinct_derive::tinct_error]
pub enum DynvError {
    /// No handler is registered for the requested type tag.
    #[error("Unknown value type{}: {message}", format_context(.context))]
    UnknownType { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No property is stored under the requested name.
    #[error("Property not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The property exists, but under a different type tag or concrete type.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A store was created against a registry with no handlers.
    #[error("Invalid handler registry{}: {message}", format_context(.context))]
    InvalidRegistry { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A pointer property outlived the object it refers to.
    #[error("Pointer target expired{}: {message}", format_context(.context))]
    Expired { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A handler could not parse the textual form of a value.
    #[error("Cannot parse value{}: {message}", format_context(.context))]
    Parse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
