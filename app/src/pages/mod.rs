mod feed;
mod landing;

pub use feed::FeedPage;
pub use landing::LandingPage;
