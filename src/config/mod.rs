//! Configuration module

mod site;

pub use site::AuthorConfig;
pub use site::NavItem;
pub use site::SiteConfig;
pub use site::SocialLink;
