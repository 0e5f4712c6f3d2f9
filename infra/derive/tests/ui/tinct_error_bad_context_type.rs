#[tinct_derive::tinct_error]
pub enum BadContextError {
    #[error("Missing: {message}")]
    Missing { message: String, context: Option<String> },
}

fn main() {}
