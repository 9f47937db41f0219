// Primitives
pub mod badge;
pub mod button;
pub mod card;
pub mod field;

// Dashboard building blocks, composed from card and badge
pub mod action_card;
pub mod contact_card;
pub mod error_fallback;
pub mod hero_banner;
pub mod loading;
pub mod stat_card;
pub mod tip_list;

// Shell frame
pub mod sidebar;

pub use action_card::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use contact_card::*;
pub use error_fallback::*;
pub use field::*;
pub use hero_banner::*;
pub use loading::*;
pub use sidebar::*;
pub use stat_card::*;
pub use tip_list::*;
