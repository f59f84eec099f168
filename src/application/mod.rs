//! Application layer - Use cases and orchestration

pub mod apply;
pub mod normalize;
pub mod render;

pub use apply::{apply, ApplyOptions, ApplyReport, PageOutcome, PageResult};
pub use normalize::{normalize, NormalizeFailure, NormalizeReport, RootRename};
pub use render::render_page;
