pub mod common;
pub mod landing;
pub mod login;
pub mod nav_menu;
pub mod profile;
pub mod register;
pub mod schedule;
pub mod settings;

pub use landing::landing_screen;
pub use login::login_modal;
pub use nav_menu::nav_menu;
pub use profile::profile_screen;
pub use register::register_modal;
pub use schedule::schedule_modal;
pub use settings::settings_screen;
