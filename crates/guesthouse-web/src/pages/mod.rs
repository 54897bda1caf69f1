//! Page Components

mod chatbot;
mod contact;
mod gallery;
mod home;
mod reviews;
mod rooms;

pub use chatbot::ChatbotPage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use reviews::ReviewsPage;
pub use rooms::RoomsPage;
