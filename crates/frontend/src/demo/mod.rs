pub mod screens;
pub mod section;

pub use section::DemoSection;
