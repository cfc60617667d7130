//! Reusable showcase UI components

pub mod card;
pub mod phone_mockup;
pub mod platform_switcher;
pub mod spinner;
pub mod status_bar;
pub mod toast;

pub use card::Card;
pub use phone_mockup::{BrowserMockup, PhoneMockup};
pub use platform_switcher::PlatformSwitcher;
pub use spinner::Spinner;
pub use status_bar::StatusBar;
pub use toast::{play_script, ToastHost, Toaster};
