pub mod codec;
pub mod config;
pub mod layout;
pub mod numeric;
pub mod redirect;
pub mod search;
pub mod store;
