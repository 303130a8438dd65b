pub mod language;

pub use language::{Bilingual, Language, TextDirection};
