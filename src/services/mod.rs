// Service layer for pysetup

pub mod folder_manager;
pub mod interpreter;
pub mod prompt;
pub mod scaffolder;
pub mod structure;
pub mod template_writer;

pub use folder_manager::FolderManager;
pub use interpreter::{InterpreterInfo, InterpreterProbe};
pub use prompt::Prompter;
pub use scaffolder::Scaffolder;
pub use structure::StructureCreator;
pub use template_writer::TemplateWriter;
