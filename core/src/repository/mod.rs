pub mod cache;
pub mod file;
pub mod traits;

pub use cache::CachedRosterRepository;
pub use file::FileRosterRepository;
pub use traits::RosterRepository;
