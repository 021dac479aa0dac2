pub mod project;

pub use project::{ActiveLens, LensId, Project, ProjectMeta};
