//! Domain logic of the "Cardápio Digital" landing page and its product demo.
//!
//! Nothing in this crate touches the browser directly. Components that drive
//! page elements go through [`shared::surface::PageSurface`] and
//! [`shared::scheduler::Scheduler`], which the frontend implements over
//! `web-sys` and the tests implement in memory.

pub mod demo;
pub mod enums;
pub mod landing;
pub mod shared;
