pub mod chosung;
pub mod filter;
pub mod sort;
pub mod suggest;
pub mod tokenizer;

pub use chosung::{chosung_skeleton, matches_search};
pub use filter::search_listings;
pub use sort::{sort_listings, SortOption};
pub use suggest::{search_suggestions, DEFAULT_SUGGESTION_LIMIT};
pub use tokenizer::{tokenize_query, ParsedQuery};
