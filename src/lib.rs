mod consts;
mod dom_api;
mod element;
pub mod error;
mod lifecycle;
mod mutation_event;
mod tab_trap;
pub mod tabbable;
pub mod trap;
pub mod types;
mod utils;

pub use consts::{TAB_GUARD_TAG_NAME, TAB_TRAP_TAG_NAME};
pub use dom_api::Dom;
pub use element::{define, define_all, define_default};
pub use error::{Error, Result};
pub use tab_trap::TabTrap;
