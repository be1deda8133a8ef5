//! Learning Path Generate UI Module (MVVM Standard)
//!
//! - model.rs: POST /api/generate
//! - view_model.rs: GenerateVm (form state, in-flight guard, elapsed timer)
//! - page.rs: GeneratePage for `/generate`

mod model;
mod page;
mod view_model;

pub use page::GeneratePage;
pub use view_model::GenerateVm;
