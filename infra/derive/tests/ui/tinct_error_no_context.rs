#[tinct_derive::tinct_error]
pub enum NoContextError {
    #[error("I/O error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
