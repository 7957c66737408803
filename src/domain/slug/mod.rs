pub mod options;
pub mod record;
pub mod repository;
pub mod services;
pub mod source;
pub mod value_objects;

pub use options::{SlugOptions, SlugOptionsProvider, SlugSource};
pub use record::SlugRecord;
pub use repository::SlugRepository;
pub use services::{SlugGenerators, SlugHooks, SlugService};
pub use value_objects::{RecordKey, ScopeCondition, ScopeFilter, SlugQuery, TransliterationMode};
