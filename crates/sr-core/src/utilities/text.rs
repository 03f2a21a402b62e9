//! Text helpers used when calendar names are rendered.

/// Title-case every word of `s`.
///
/// A word is a maximal run of ASCII letters, hyphens and apostrophes, and
/// hyphens split it into segments. The first character of each segment is
/// upper-cased when it is a letter; every other letter is lower-cased, so
/// `'tis` stays `'tis`. Characters outside words are copied unchanged.
///
/// ```
/// use sr_core::utilities::title_case;
/// assert_eq!(title_case("mid-year's day"), "Mid-Year's Day");
/// assert_eq!(title_case("HALIMATH 1419"), "Halimath 1419");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize = true;
    for c in s.chars() {
        if c.is_ascii_alphabetic() {
            if capitalize {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c.to_ascii_lowercase());
            }
            capitalize = false;
        } else if c == '-' {
            out.push(c);
            capitalize = true;
        } else if c == '\'' {
            out.push(c);
            capitalize = false;
        } else {
            out.push(c);
            capitalize = true;
        }
    }
    out
}
