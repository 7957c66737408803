// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod slug_repo;
pub mod time;

pub use slug_repo::{InMemorySlugRepo, StoredSlug};
pub use time::{FixedClock, fixed_now};
