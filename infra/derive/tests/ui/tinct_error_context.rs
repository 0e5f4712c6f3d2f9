use std::borrow::Cow;
use tinct_derive::tinct_error;

#[tinct_error]
pub enum LookupError {
    #[error("Missing key{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unsupported")]
    Unsupported {},
}

fn lookup(key: &'static str) -> Result<u32, LookupError> {
    Err(LookupError::Missing { message: key.into(), context: None })
}

fn main() {
    let err = lookup("alpha").context("Resolving alpha").unwrap_err();
    assert_eq!(err.context_str(), Some("Resolving alpha"));
    assert_eq!(err.to_string(), "Missing key (Resolving alpha): alpha");

    let plain = LookupError::Unsupported {};
    assert_eq!(plain.context_str(), None);
}
