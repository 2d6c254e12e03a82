//! Domain types - what the relay asks the provider and what it hands back.

mod operation;
mod query;
mod result;

pub use operation::{CacheKey, Operation};
pub use query::{
    DEFAULT_LANGUAGES_TARGET, DEFAULT_SOURCE, DetectQuery, LanguagesQuery, TranslateQuery,
};
pub use result::{Detection, Language};
