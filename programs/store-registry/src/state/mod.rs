pub mod admin;
pub mod registry;
pub mod store;

pub use admin::*;
pub use registry::*;
pub use store::*;
