use serde::{Deserialize, Serialize};

/// Языки интерфейса сайта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

/// Направление текста документа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

impl Language {
    /// Код языка (для `<html lang>` и localStorage)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn dir(&self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    /// Парсинг из кода языка
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other language, used by the navbar switch.
    pub fn toggled(&self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Ar, Language::En]
    }
}

/// A static piece of text in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub ar: &'static str,
    pub en: &'static str,
}

impl Bilingual {
    pub const fn new(ar: &'static str, en: &'static str) -> Self {
        Self { ar, en }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Ar => self.ar,
            Language::En => self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_and_direction() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Ar.dir().as_str(), "rtl");
        assert_eq!(Language::En.dir().as_str(), "ltr");
    }

    #[test]
    fn test_default_is_arabic_and_toggle_flips() {
        assert_eq!(Language::default(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_bilingual_get() {
        let text = Bilingual::new("مرحبا", "Hello");
        assert_eq!(text.get(Language::Ar), "مرحبا");
        assert_eq!(text.get(Language::En), "Hello");
    }
}
