use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::interest::InterestTag;

/// Ответы посетителя, накопленные по шагам формы
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAnswers {
    pub name: String,
    pub email: String,
    pub interest_tags: BTreeSet<InterestTag>,
    pub message: String,
}

impl FormAnswers {
    /// Adds the tag if absent, removes it if present.
    pub fn toggle_interest(&mut self, tag: InterestTag) {
        if !self.interest_tags.remove(&tag) {
            self.interest_tags.insert(tag);
        }
    }

    pub fn has_interest(&self, tag: InterestTag) -> bool {
        self.interest_tags.contains(&tag)
    }

    /// Comma separated tag ids, in tag order.
    pub fn interests_line(&self) -> String {
        self.interest_tags
            .iter()
            .map(|tag| tag.id())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_empty(&self) -> bool {
        *self == FormAnswers::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut answers = FormAnswers::default();
        answers.toggle_interest(InterestTag::Food);
        let before = answers.clone();

        answers.toggle_interest(InterestTag::Nature);
        answers.toggle_interest(InterestTag::Nature);
        assert_eq!(answers, before);

        answers.toggle_interest(InterestTag::Food);
        answers.toggle_interest(InterestTag::Food);
        assert_eq!(answers, before);
    }

    #[test]
    fn test_interests_line_is_order_independent() {
        let mut a = FormAnswers::default();
        a.toggle_interest(InterestTag::Photography);
        a.toggle_interest(InterestTag::Culture);

        let mut b = FormAnswers::default();
        b.toggle_interest(InterestTag::Culture);
        b.toggle_interest(InterestTag::Photography);

        assert_eq!(a.interests_line(), "culture, photography");
        assert_eq!(a.interests_line(), b.interests_line());
    }
}
