pub mod commit_section;
pub mod load_section;

pub use commit_section::{CommitSectionError, CommitSectionUseCase, ICommitSectionUseCase};
pub use load_section::{ILoadSectionUseCase, LoadSectionUseCase, LoadedSection};
