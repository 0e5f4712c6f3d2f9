use std::borrow::Cow;
use tinct_derive::tinct_error;

#[tinct_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Bad value{}: {message}", format_context(.context))]
    BadValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    std::fs::read_to_string("/definitely/not/here").context("Reading demo file")
}

fn main() {
    let err = read().unwrap_err();
    assert!(matches!(err, DemoError::Io { .. }));

    let bad: DemoError = std::io::Error::other("boom").into();
    assert!(matches!(bad, DemoError::Io { context: None, .. }));

    let parsed: Result<u8, DemoError> =
        Err(DemoError::BadValue { message: "x".into(), context: None });
    let err = parsed.context("Parsing demo value").unwrap_err();
    assert_eq!(err.to_string(), "Bad value (Parsing demo value): x");
}
