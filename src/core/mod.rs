pub mod chained;
pub mod engine;
pub mod fetch;
pub mod reactive;
pub mod sequential;

pub use crate::domain::model::{Film, Homeworld, Person, PersonInfo};
pub use crate::domain::ports::{Aggregator, ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
