//! UI Components for CV Forge.

mod experience_fields;
mod photo_slot;
mod submit_bar;
mod theme_switcher;

pub use experience_fields::ExperienceFields;
pub use photo_slot::PhotoSlot;
pub use submit_bar::SubmitBar;
pub use theme_switcher::ThemeSwitcher;
