pub mod components;
pub mod dom_surface;
pub mod icons;
pub mod notifications;
pub mod page_config;
pub mod scroll;
pub mod timers;
