#[tinct_derive::tinct_error]
pub enum TupleError {
    Io(std::io::Error),
}

fn main() {}
