pub mod card_animated;
pub mod faq;
pub mod hero_carousel;
pub mod optimized_image;
pub mod page_header;

pub use card_animated::CardAnimated;
pub use faq::Faq;
pub use hero_carousel::HeroCarousel;
pub use optimized_image::OptimizedImage;
pub use page_header::PageHeader;
