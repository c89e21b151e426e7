mod account;
mod cache;
mod config;
mod list;

pub use self::account::account;
pub use self::cache::cache;
pub use self::config::config;
pub use self::list::list;
