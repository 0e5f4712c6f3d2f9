#[tinct_derive::tinct_error]
pub struct PlainError {
    message: String,
}

fn main() {}
