pub mod cat;
pub mod contact;
pub mod crew;
pub mod featured;
pub mod founder;
pub mod work;

pub use cat::Cat;
pub use contact::{ContactStatus, ContactSubmission};
pub use crew::CrewMember;
pub use featured::FeaturedConfig;
pub use founder::Founder;
pub use work::Work;
