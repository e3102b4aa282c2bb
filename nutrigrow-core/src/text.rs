//! Display-case helpers shared by the scorers and the assistant.

/// Upper-case the first letter of every alphabetic run and lower-case the
/// rest.
///
/// Any non-alphabetic character starts a new word, so `"uttar pradesh"`
/// becomes `"Uttar Pradesh"` and `"rice(fortified)"` becomes
/// `"Rice(Fortified)"`.
///
/// # Examples
/// ```
/// use nutrigrow_core::text::title_case;
///
/// assert_eq!(title_case("WEST bengal"), "West Bengal");
/// ```
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Upper-case the first character and lower-case the remainder.
///
/// # Examples
/// ```
/// use nutrigrow_core::text::capitalize;
///
/// assert_eq!(capitalize("vEGETARIAN"), "Vegetarian");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
