mod parser;
mod store;
mod summarizer;

pub use parser::{ContentParser, ParsedContent};
pub use store::ArticleStore;
pub use summarizer::Summarizer;
