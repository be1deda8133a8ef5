//! Learning Path Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: LearningPathDetailsVm with RwSignals, DetailsTab
//! - view.rs: LearningPathView (tab bar + active tab), shared with the generate page
//! - page.rs: LearningPathPage for `/learning-path/:id`
//! - tabs/: one component per tab

mod model;
mod page;
pub mod tabs;
mod view;
mod view_model;

pub use page::LearningPathPage;
pub use view::LearningPathView;
pub use view_model::{DetailsTab, LearningPathDetailsVm};
