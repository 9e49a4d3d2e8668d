pub mod advantages;
pub mod contact;
pub mod hero;
pub mod solutions;
pub mod testimonials;

pub use advantages::Advantages;
pub use contact::ContactSection;
pub use hero::Hero;
pub use solutions::Solutions;
pub use testimonials::Testimonials;
