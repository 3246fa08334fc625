//! # desk-view
//!
//! The presentation core of contractdesk:
//!
//! - [`mapper`]: raw API records → uniform [`DisplayRecord`] rows
//! - [`filter`]: text query + status category over rows, with per-tab counts
//! - [`role`]: the Role Gate (role → capabilities, landing route)
//! - [`controller`]: the per-page list lifecycle with stale-result protection
//! - [`dashboard`]: the administrative summary
//!
//! Everything here is synchronous and pure except the async drivers on
//! [`ListController`], which talk to a [`RecordSource`].

pub mod controller;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod format;
pub mod mapper;
pub mod role;
pub mod route;
pub mod source;

pub use controller::{Effect, FetchTicket, ListController, ListState, Notice};
pub use error::{MappingError, ViewError};
pub use filter::{AttendeeCategory, Category, ContractCategory, FilterState, MeetingCategory};
pub use format::Formatter;
pub use mapper::{DisplayRecord, RecordKind, StatusTone};
pub use role::{Capabilities, can_visit, landing_route};
pub use route::Route;
pub use source::{ListRecord, RecordSource};
