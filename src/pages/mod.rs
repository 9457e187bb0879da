//! One component per route.

mod about;
mod certificates;
mod contact;
mod experience;
mod home;
mod not_found;
mod projects;
mod skills;

pub use about::AboutPage;
pub use certificates::CertificatesPage;
pub use contact::ContactPage;
pub use experience::ExperiencePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use skills::SkillsPage;
