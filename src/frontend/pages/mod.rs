//! One page component per route

mod about;
mod blog;
mod blog_post;
mod home;
mod not_found;
mod project_detail;
mod projects;
mod resume;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use resume::ResumePage;
