pub mod api;
pub mod editor;
pub mod fs;

pub use api::{ApiClient, ProfilePatch, ProfilePage};
pub use editor::{Editor, Viewer};
