//! Reusable UI components for the portfolio frontend

mod alert;
mod button;
mod chips;
mod footer;
mod heading;
mod nav;
mod post_card;
mod project_card;
mod skeleton;

pub use alert::{Alert, AlertVariant, EmptyFilterPanel, ErrorPanel, NotFoundPanel};
pub use button::{ButtonVariant, FilterButton, LinkButton};
pub use chips::{BulletList, Chips};
pub use footer::Footer;
pub use heading::Heading;
pub use nav::Nav;
pub use post_card::PostCard;
pub use project_card::{CardImage, ProjectCard};
pub use skeleton::{CardSkeleton, DetailSkeleton, GridSkeleton};
