mod account;
mod paths;
mod settings;

pub use account::{Account, DEFAULT_ACCOUNT};
pub use paths::{Paths, HOME_ENV};
pub use settings::{CacheConfig, Config, OutputConfig, TtlConfig};
