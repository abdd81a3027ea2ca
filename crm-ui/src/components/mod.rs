pub mod board;
pub mod cards;
pub mod companies;
pub mod dashboard;
pub mod employees;
pub mod entry;
pub mod loading;
pub mod sidebar;
pub mod views;
pub mod workspace;
