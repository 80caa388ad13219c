mod claims;
pub use claims::{Claims, UserData};

pub mod snippet;
pub use snippet::{Snippet, SnippetDraft};
