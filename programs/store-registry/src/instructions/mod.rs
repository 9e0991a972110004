pub mod initialize;
pub mod register_store;
pub mod verify_store;
pub mod get_store;
pub mod is_store_verified;
pub mod set_admin;
pub mod current_admin;

pub use initialize::*;
pub use register_store::*;
pub use verify_store::*;
pub use get_store::*;
pub use is_store_verified::*;
pub use set_admin::*;
pub use current_admin::*;
