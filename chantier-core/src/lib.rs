//! Core types for the chantier ecosystem.
//!
//! This crate provides the domain shared by chantier-cli and chantier-server:
//! - `Project`, `Collaborator` and `Task` models matching the backend wire format
//! - the fixed 6-week month grid and per-day task period resolution
//! - an in-memory `ProjectStore` with the backend's CRUD and pagination contract

pub mod calendar;
pub mod dates;
pub mod error;
pub mod palette;
pub mod project;
pub mod store;

// Re-export the main types at crate root for convenience
pub use calendar::{BorderStyle, CalendarDay, MonthCursor, TaskPeriod};
pub use error::{ChantierError, ChantierResult};
pub use project::{Collaborator, Project, Task, TaskStatus};
pub use store::{NewProject, ProjectPage, ProjectStore, ProjectUpdate};
