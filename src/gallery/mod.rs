//! Project gallery and page effects
//!
//! The pure pieces (records, filtering, card markup, scramble and tilt math)
//! live in submodules and run on any target; `GalleryController` wires them
//! to the DOM on wasm.

pub mod data;
pub mod effects;
pub mod markup;

#[cfg(target_arch = "wasm32")]
mod controller;

pub use data::{filter_records, load_projects, Category, Filter, ProjectRecord};
pub use markup::{grid_markup, project_card};

#[cfg(target_arch = "wasm32")]
pub use controller::GalleryController;
