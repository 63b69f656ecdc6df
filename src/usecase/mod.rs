// tagmark use cases
// One short validated transaction per application-level operation.
// Raw strings come in, validation happens here, and every failure crosses
// the boundary as an UnexpectedError carrying its cause.

pub mod add_bookmark;
pub mod get_bookmarks;
pub mod remove_bookmark;
pub mod update_bookmark;

pub use add_bookmark::AddBookmark;
pub use get_bookmarks::GetBookmarks;
pub use remove_bookmark::RemoveBookmark;
pub use update_bookmark::UpdateBookmark;
