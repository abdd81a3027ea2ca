pub mod error;
pub mod identity;
pub mod navigation;
pub mod registry;
pub mod selection;
pub mod session;
pub mod shell;
pub mod store;
pub mod view;
