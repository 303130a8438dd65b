pub mod footer;
pub mod floating_whatsapp;

pub use floating_whatsapp::FloatingWhatsApp;
pub use footer::Footer;
