mod badge;
mod button;
mod card;
mod category_filter;
mod icons;
mod project_card;
mod project_grid;

pub use badge::Badge;
pub use button::Button;
pub use card::{Card, CardContent};
pub use category_filter::CategoryFilter;
pub use icons::{ExternalLinkIcon, FilterIcon, GithubIcon};
pub use project_card::ProjectCard;
pub use project_grid::ProjectShowcase;
