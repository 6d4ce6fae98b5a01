pub mod card;
pub mod list;
pub mod post;

pub use card::JournalCard;
pub use list::{JournalPage, LatestJournal};
pub use post::JournalPostPage;
