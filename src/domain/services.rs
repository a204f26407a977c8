//! Derived display values computed from raw form input.
//!
//! Nothing in here is stored: the greeting and the parsed age are
//! recomputed from the current text on every render.

/// Builds the greeting shown at the top of the setup form.
///
/// Returns "Welcome, {name}" once a name has been entered, and a
/// generic "Welcome!!" while the name field is still empty.
///
/// # Examples
///
/// ```
/// use tprof::domain::greeting;
///
/// assert_eq!(greeting("Ada"), "Welcome, Ada");
/// assert_eq!(greeting(""), "Welcome!!");
/// ```
pub fn greeting(name: &str) -> String {
    if name.is_empty() {
        "Welcome!!".to_string()
    } else {
        format!("Welcome, {}", name)
    }
}

/// Parses the age field as a base-10 integer.
///
/// The age field accepts arbitrary text, so a failed parse is not an
/// error: it simply means no age was provided. No range, sign, or
/// formatting policy is imposed beyond what integer parsing itself
/// requires, so "-3", "+5", and "007" all parse.
pub fn parse_age(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}
