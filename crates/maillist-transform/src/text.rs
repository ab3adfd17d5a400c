//! Text helpers for contact filtering and name derivation.

use maillist_model::schema::BLOCKED_EMAIL_PREFIXES;

/// Returns true when the address starts with one of the blocked placeholder
/// prefixes. The address is lower-cased before comparison; the prefixes are
/// literal and already lower-case.
pub fn is_blocked_email(address: &str) -> bool {
    let lowered = address.to_lowercase();
    BLOCKED_EMAIL_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

/// First whitespace-separated token of a full name, capitalized: first
/// character upper-cased, remainder lower-cased.
///
/// Case mapping is Unicode char-wise, so "joão da silva" yields "João".
/// A single-char mapping may expand (e.g. "ß" upper-cases to "SS"); that is
/// the defined behavior for scripts outside the Latin export data.
pub fn first_name(full_name: &str) -> String {
    match full_name.split_whitespace().next() {
        Some(token) => capitalize(token),
        None => String::new(),
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut capitalized: String = first.to_uppercase().collect();
    capitalized.push_str(&chars.as_str().to_lowercase());
    capitalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_prefixes_match_case_insensitively() {
        assert!(is_blocked_email("teste@x.com"));
        assert!(is_blocked_email("TESTE@x.com"));
        assert!(is_blocked_email("Cliente123@y.com"));
        assert!(is_blocked_email("0@z.com"));
        assert!(is_blocked_email("0000@z.com"));
        assert!(is_blocked_email("pacientesemcadastro@z.com"));
    }

    #[test]
    fn ordinary_addresses_pass() {
        assert!(!is_blocked_email("ana@x.com"));
        // Blocked prefixes are prefixes, not substrings.
        assert!(!is_blocked_email("contato.teste@x.com"));
        assert!(!is_blocked_email("x0@z.com"));
    }

    #[test]
    fn first_name_takes_first_token_capitalized() {
        assert_eq!(first_name("joão da silva"), "João");
        assert_eq!(first_name("MARIA"), "Maria");
        assert_eq!(first_name("  ana   souza "), "Ana");
        assert_eq!(first_name("d'avila costa"), "D'avila");
    }

    #[test]
    fn first_name_of_blank_is_empty() {
        assert_eq!(first_name(""), "");
        assert_eq!(first_name("   "), "");
    }

    #[test]
    fn capitalize_is_char_wise_unicode() {
        assert_eq!(first_name("émile zola"), "Émile");
        assert_eq!(first_name("ßen"), "SSen");
    }
}
