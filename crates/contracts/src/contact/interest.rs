use serde::{Deserialize, Serialize};

use crate::shared::{Bilingual, Language};

/// Темы, которые посетитель может отметить на третьем шаге формы
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestTag {
    Culture,
    Nature,
    Food,
    Photography,
}

impl InterestTag {
    /// Стабильный идентификатор (попадает в тело письма)
    pub fn id(&self) -> &'static str {
        match self {
            InterestTag::Culture => "culture",
            InterestTag::Nature => "nature",
            InterestTag::Food => "food",
            InterestTag::Photography => "photography",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            InterestTag::Culture => "🏛️",
            InterestTag::Nature => "🏔️",
            InterestTag::Food => "🍽️",
            InterestTag::Photography => "📸",
        }
    }

    pub fn label(&self) -> Bilingual {
        match self {
            InterestTag::Culture => Bilingual::new("الثقافة والتاريخ", "Culture & History"),
            InterestTag::Nature => Bilingual::new("الطبيعة والمغامرة", "Nature & Adventure"),
            InterestTag::Food => Bilingual::new("الطعام التقليدي", "Traditional Food"),
            InterestTag::Photography => Bilingual::new("التصوير الفوتوغرافي", "Photography"),
        }
    }

    pub fn label_in(&self, language: Language) -> &'static str {
        self.label().get(language)
    }

    /// Парсинг из идентификатора
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "culture" => Some(InterestTag::Culture),
            "nature" => Some(InterestTag::Nature),
            "food" => Some(InterestTag::Food),
            "photography" => Some(InterestTag::Photography),
            _ => None,
        }
    }

    /// Все теги в порядке отображения
    pub fn all() -> [InterestTag; 4] {
        [
            InterestTag::Culture,
            InterestTag::Nature,
            InterestTag::Food,
            InterestTag::Photography,
        ]
    }
}
