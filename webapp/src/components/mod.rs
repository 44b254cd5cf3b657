pub mod animated_section;
pub mod entrance;
pub mod project_card;
pub mod skill_badge;
pub mod theme;
pub mod video;

pub use animated_section::AnimatedSection;
pub use project_card::ProjectCard;
pub use skill_badge::SkillBadge;
pub use theme::{ThemeProvider, ThemeToggle};
pub use video::DijkstraVideo;
