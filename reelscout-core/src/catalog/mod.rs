//! Fetch controllers for the result list and the detail view.
//!
//! Both follow the same discipline: a request takes a ticket from its
//! [`RequestSlot`](crate::request::RequestSlot) before it is sent, and its
//! result is committed only if no newer ticket was issued meanwhile.

pub mod controller;
pub mod detail;

pub use controller::{CatalogController, CatalogPage};
pub use detail::{DETAIL_ERROR_MESSAGE, DetailController};
