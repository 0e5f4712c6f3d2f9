use std::borrow::Cow;

#[tinct_derive::tinct_error]
pub enum ConverterError {
    #[error("Unknown converter{}: {message}", format_context(.context))]
    Unknown { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unsupported conversion{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Cannot parse color{}: {message}", format_context(.context))]
    Parse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("No display converter{}: {message}", format_context(.context))]
    NoDisplay { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
