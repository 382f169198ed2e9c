pub use blog::*;
pub use credentials::*;
pub use personal::*;
pub use project::*;
pub use skills::*;

mod blog;
mod credentials;
pub mod lenient;
mod personal;
mod project;
mod skills;
