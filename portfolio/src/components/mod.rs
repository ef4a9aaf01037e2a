//! Leptos UI components for the page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioPage (owns the scroll offset)
//! ├── Header (tint follows scroll offset)
//! └── main
//!     ├── Hero
//!     │   ├── SocialLinks
//!     │   │   └── SocialLink ×3
//!     │   └── FloatingShapes (20 shapes)
//!     ├── Projects
//!     │   └── ProjectCardView ×2
//!     ├── About
//!     └── Contact
//!         └── SocialLinks (large)
//! ```

mod about;
mod contact;
mod header;
mod hero;
mod icons;
mod page;
mod projects;
mod social;

pub use about::About;
pub use contact::Contact;
pub use header::Header;
pub use hero::{FloatingShapes, Hero};
pub use icons::Icon;
pub use page::PortfolioPage;
pub use projects::{ProjectCardView, Projects};
pub use social::{SocialLink, SocialLinks};
