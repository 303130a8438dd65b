use super::answers::FormAnswers;

/// Gate for leaving `step`. Steps outside `1..=4` never validate.
pub fn validate_step(step: u8, answers: &FormAnswers) -> bool {
    match step {
        1 => !answers.name.trim().is_empty(),
        2 => is_valid_email(&answers.email),
        3 => !answers.interest_tags.is_empty(),
        4 => !answers.message.trim().is_empty(),
        _ => false,
    }
}

/// `local@domain.tld` shape check.
///
/// No whitespace anywhere, exactly one `@` with a non-empty local part, and a
/// domain holding a dot that has at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::InterestTag;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("amal@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.ye"));
        assert!(is_valid_email("a@b..c"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("amal@"));
        assert!(!is_valid_email("amal@example"));
        assert!(!is_valid_email("amal@.com"));
        assert!(!is_valid_email("amal@example."));
        assert!(!is_valid_email("am al@example.com"));
        assert!(!is_valid_email("amal@@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email(" amal@example.com"));
    }

    #[test]
    fn test_step_gates() {
        let mut answers = FormAnswers::default();
        for step in 1..=4 {
            assert!(!validate_step(step, &answers), "step {step} on empty answers");
        }

        answers.name = "   ".into();
        assert!(!validate_step(1, &answers));
        answers.name = " Amal ".into();
        assert!(validate_step(1, &answers));

        answers.email = "amal@example.com".into();
        assert!(validate_step(2, &answers));

        answers.toggle_interest(InterestTag::Nature);
        assert!(validate_step(3, &answers));

        answers.message = "\n\t".into();
        assert!(!validate_step(4, &answers));
        answers.message = "Tell me about Socotra".into();
        assert!(validate_step(4, &answers));
    }

    #[test]
    fn test_out_of_range_steps_never_validate() {
        let answers = FormAnswers {
            name: "Amal".into(),
            email: "amal@example.com".into(),
            interest_tags: InterestTag::all().into_iter().collect(),
            message: "hi".into(),
        };
        assert!(!validate_step(0, &answers));
        assert!(!validate_step(5, &answers));
        assert!(!validate_step(u8::MAX, &answers));
    }
}
