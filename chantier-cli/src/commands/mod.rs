pub mod calendar;
pub mod projects;
pub mod show;
