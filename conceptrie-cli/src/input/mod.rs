//! Input handling module

pub mod dictionary;
pub mod glob_resolver;
pub mod token_stream;

pub use dictionary::{load_dictionary, DictionaryFormat};
pub use glob_resolver::resolve_patterns;
pub use token_stream::TokenStream;
