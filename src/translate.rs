//! Message translation: pure `(key, params) -> string` lookup with
//! `%placeholder%` substitution. Injected through AppState, never resolved
//! globally. An unknown key falls back to the key itself.

use std::collections::HashMap;

pub struct Translator {
    catalog: HashMap<&'static str, &'static str>,
}

impl Translator {
    /// Default English catalog covering every message key the pipeline emits.
    pub fn english() -> Self {
        let catalog = HashMap::from([
            ("message.not_found", "%name% not found"),
            ("message.created", "%name% created successfully"),
            ("message.updated", "%name% updated successfully"),
            ("message.deleted", "%name% deleted successfully"),
            ("message.json_content", "Content-Type header must be application/json"),
            ("message.json", "Request body is not valid JSON"),
            ("invalid.data", "Data not valid"),
            ("extra.fields", "This form should not contain extra fields"),
            ("blank.lastname", "Lastname should not be blank"),
            ("invalid.lastname", "Lastname must contain only letters and spaces"),
            ("blank.firstname", "Firstname should not be blank"),
            ("invalid.firstname", "Firstname must contain only letters and spaces"),
            ("blank.gender", "Gender should not be blank"),
            ("invalid.gender", "Gender must be 1 or 2"),
            ("blank.email", "Email should not be blank"),
            ("invalid.email", "Email is not a valid email address"),
            ("blank.mobile", "Mobile should not be blank"),
            ("invalid.mobile", "Mobile must be exactly 10 digits"),
            ("blank.registration_number", "Registration number should not be blank"),
            ("invalid.registration_number", "Registration number must be a positive integer"),
        ]);
        Translator { catalog }
    }

    /// Look up `key` and substitute `%name%`-style placeholders from `params`.
    pub fn trans(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut out = self.catalog.get(key).copied().unwrap_or(key).to_string();
        for (placeholder, value) in params {
            out = out.replace(placeholder, value);
        }
        out
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_placeholders() {
        let t = Translator::english();
        assert_eq!(
            t.trans("message.not_found", &[("%name%", "Student")]),
            "Student not found"
        );
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let t = Translator::english();
        assert_eq!(t.trans("message.no_such_key", &[]), "message.no_such_key");
    }
}
