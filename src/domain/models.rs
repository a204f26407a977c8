use crate::domain::services::parse_age;

/// The two values handed from the setup form to the details screen.
///
/// Constructed once when the user continues and never mutated: the
/// details screen renders exactly this snapshot, and nothing flows
/// back to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    /// Name exactly as typed, possibly empty.
    pub name: String,
    /// Parsed age, absent when the age text was not a valid integer.
    pub age: Option<i64>,
}

impl ProfileDetails {
    /// Snapshots the current form input into an immutable payload.
    ///
    /// The name is carried verbatim (an empty name stays empty here;
    /// the "N/A" substitution happens at display time). The age text
    /// is parsed at this moment: whatever the field held when the
    /// user continued decides whether an age is present.
    pub fn from_input(name: &str, age_text: &str) -> Self {
        Self {
            name: name.to_string(),
            age: parse_age(age_text),
        }
    }

    /// Name line for the details screen, substituting "N/A" when no
    /// name was entered.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            "Name: N/A".to_string()
        } else {
            format!("Name: {}", self.name)
        }
    }

    /// Age line for the details screen.
    pub fn display_age(&self) -> String {
        match self.age {
            Some(age) => format!("Age: {}", age),
            None => "Age not provided".to_string(),
        }
    }
}
