pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod remote;

pub use client::CmsClient;
pub use config::CmsConfig;
pub use content::{
    FileAsset, JournalEntry, Language, Page, PageInfo, Project, ProjectFilter, PublishStatus,
    Service,
};
pub use error::{CmsError, Result};
pub use remote::Remote;
