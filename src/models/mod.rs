// Data models for pysetup

pub mod project_name;
pub mod report;
pub mod template;

pub use project_name::ProjectName;
pub use report::{DirectoryAction, FileAction, FolderStatus, Outcome, ScaffoldReport};
pub use template::FileTemplate;
