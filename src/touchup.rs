// Display touch-up for selected users
//
// Radios cannot render UTF-8, so text fields are folded to ASCII and title
// cased before export: æ -> ae, ø -> o, å -> a, ü -> u and so on. Call signs
// are only upper cased. Radio IDs are never touched.

use deunicode::deunicode_with_tofu;

use crate::registry::DmrUser;

/// Fold text to its closest ASCII approximation.
///
/// Non-Latin scripts are romanised (Москва -> Moskva); characters with no
/// approximation are dropped.
pub fn transliterate(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    deunicode_with_tofu(text, "")
}

/// Capitalize the first letter of each word, lowercase the rest.
///
/// A word starts at any letter not preceded by a letter.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Device-safe version of a free-text field
pub fn display_text(text: &str) -> String {
    title_case(&transliterate(text))
}

/// Touch up one user for display on a radio
pub fn touch_up(user: &DmrUser) -> DmrUser {
    DmrUser {
        radio_id: user.radio_id,
        id: user.id,
        callsign: user.callsign.to_uppercase(),
        fname: display_text(&user.fname),
        surname: display_text(&user.surname),
        name: display_text(&user.name),
        city: display_text(&user.city),
        state: display_text(&user.state),
        country: display_text(&user.country),
        remarks: user.remarks.clone(),
    }
}

/// Touch up every selected user, preserving order
pub fn touch_up_all(users: &[&DmrUser]) -> Vec<DmrUser> {
    users.iter().map(|u| touch_up(u)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_transliterate_diacritics() {
        assert_eq!(transliterate("Müller"), "Muller");
        assert_eq!(transliterate("øle"), "ole");
        assert_eq!(transliterate("Bærum"), "Baerum");
        assert_eq!(transliterate("Ålesund"), "Alesund");
        assert_eq!(transliterate("Straße"), "Strasse");
        assert_eq!(transliterate("Łódź"), "Lodz");
        assert_eq!(transliterate("São Paulo"), "Sao Paulo");
    }

    #[test]
    fn test_transliterate_cyrillic() {
        assert_eq!(transliterate("Москва"), "Moskva");
        assert_eq!(transliterate("Иван"), "Ivan");
        assert_eq!(display_text("ИВАН ПЕТРОВ"), "Ivan Petrov");
    }

    #[test]
    fn test_transliterate_other_scripts_are_not_emptied() {
        for text in ["Αθήνα", "Київ", "北京", "Ελλάδα"] {
            let folded = display_text(text);
            assert!(!folded.trim().is_empty(), "{} folded to nothing", text);
            assert!(folded.is_ascii());
        }
        assert!(display_text("Αθήνα").starts_with("Ath"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("JOHN SMITH"), "John Smith");
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("saint-jean"), "Saint-Jean");
        assert_eq!(title_case("la1ab"), "La1Ab");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(display_text("Müller"), "Muller");
        assert_eq!(display_text("øle"), "Ole");
        assert_eq!(display_text("TRØNDELAG"), "Trondelag");
    }

    #[test]
    fn test_touch_up_user() {
        let user = DmrUser {
            radio_id: 302123456,
            id: 9,
            callsign: "la1ab".to_string(),
            fname: "øle".to_string(),
            surname: "bjørnsen".to_string(),
            name: "øle".to_string(),
            city: "tromsø".to_string(),
            state: "troms".to_string(),
            country: "norway".to_string(),
            remarks: "Ø".to_string(),
        };

        let touched = touch_up(&user);
        assert_eq!(touched.callsign, "LA1AB");
        assert_eq!(touched.fname, "Ole");
        assert_eq!(touched.surname, "Bjornsen");
        assert_eq!(touched.city, "Tromso");
        assert_eq!(touched.country, "Norway");
        assert_eq!(touched.radio_id, 302123456);
        assert_eq!(touched.id, 9);
        // Source record is left alone
        assert_eq!(user.fname, "øle");
    }

    proptest! {
        #[test]
        fn prop_ascii_transliteration_is_identity(text in "[ -~]{0,40}") {
            prop_assert_eq!(transliterate(&text), text);
        }

        #[test]
        fn prop_display_text_is_idempotent_and_ascii(text in "\\PC{0,30}") {
            let once = display_text(&text);
            prop_assert!(once.is_ascii());
            prop_assert_eq!(display_text(&once), once.clone());
        }
    }
}
