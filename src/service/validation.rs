//! Student submission validation.
//!
//! All applicable rules run on every field; nothing short-circuits at the
//! first failure. Messages come back translated, de-duplicated by text,
//! first-seen order preserved. Validation never errors out: a submission
//! that cannot bind at all yields the fallback "Data not valid" message.

use crate::model::StudentDraft;
use crate::translate::Translator;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// HTML5 email grammar (the WHATWG input[type=email] pattern).
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// The writable field names, in evaluation (and error) order.
const FIELDS: &[&str] = &[
    "lastname",
    "firstname",
    "gender",
    "email",
    "mobile",
    "registrationNumber",
];

pub struct StudentValidator;

impl StudentValidator {
    /// Validate a raw JSON submission into a draft, or collect every rule
    /// violation. The same draft feeds both create and wholesale update.
    pub fn validate(body: &Value, translator: &Translator) -> Result<StudentDraft, Vec<String>> {
        let Some(map) = body.as_object() else {
            return Err(vec![translator.trans("invalid.data", &[])]);
        };

        let mut errors = ErrorList::new(translator);

        for key in map.keys() {
            if !FIELDS.contains(&key.as_str()) {
                errors.push("extra.fields");
            }
        }

        let lastname = check_name(map.get("lastname"), "lastname", &mut errors);
        let firstname = check_name(map.get("firstname"), "firstname", &mut errors);
        let gender = check_gender(map.get("gender"), &mut errors);
        let email = check_email(map.get("email"), &mut errors);
        let mobile = check_mobile(map.get("mobile"), &mut errors);
        let registration_number = check_registration_number(map.get("registrationNumber"), &mut errors);

        match (lastname, firstname, gender, email, mobile, registration_number) {
            (Some(lastname), Some(firstname), Some(gender), Some(email), Some(mobile), Some(registration_number))
                if errors.is_empty() =>
            {
                Ok(StudentDraft {
                    lastname,
                    firstname,
                    gender,
                    email,
                    mobile,
                    registration_number,
                })
            }
            _ => {
                if errors.is_empty() {
                    errors.push("invalid.data");
                }
                Err(errors.into_messages())
            }
        }
    }
}

/// Translated messages, de-duplicated by text in first-seen order.
struct ErrorList<'a> {
    translator: &'a Translator,
    messages: Vec<String>,
}

impl<'a> ErrorList<'a> {
    fn new(translator: &'a Translator) -> Self {
        ErrorList {
            translator,
            messages: Vec::new(),
        }
    }

    fn push(&mut self, key: &str) {
        let message = self.translator.trans(key, &[]);
        if !self.messages.contains(&message) {
            self.messages.push(message);
        }
    }

    fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// Missing, null, or whitespace-only string counts as blank.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn check_name(value: Option<&Value>, field: &str, errors: &mut ErrorList<'_>) -> Option<String> {
    if is_blank(value) {
        errors.push(&format!("blank.{}", field));
        return None;
    }
    let invalid_key = format!("invalid.{}", field);
    match value.and_then(Value::as_str) {
        Some(s) if s.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') => Some(s.to_string()),
        _ => {
            errors.push(&invalid_key);
            None
        }
    }
}

fn check_gender(value: Option<&Value>, errors: &mut ErrorList<'_>) -> Option<i16> {
    if is_blank(value) {
        errors.push("blank.gender");
        return None;
    }
    // Digit strings are coerced the way form binding coerced them.
    let n = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match n {
        Some(1) => Some(1),
        Some(2) => Some(2),
        _ => {
            errors.push("invalid.gender");
            None
        }
    }
}

fn check_email(value: Option<&Value>, errors: &mut ErrorList<'_>) -> Option<String> {
    if is_blank(value) {
        errors.push("blank.email");
        return None;
    }
    match value.and_then(Value::as_str) {
        Some(s) if EMAIL_RE.is_match(s) => Some(s.to_string()),
        _ => {
            errors.push("invalid.email");
            None
        }
    }
}

fn check_mobile(value: Option<&Value>, errors: &mut ErrorList<'_>) -> Option<String> {
    if is_blank(value) {
        errors.push("blank.mobile");
        return None;
    }
    let s = match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    let Some(s) = s else {
        errors.push("invalid.mobile");
        return None;
    };
    // Both rules run so a short non-numeric value still reports once.
    let mut ok = true;
    if !s.chars().all(|c| c.is_ascii_digit()) {
        errors.push("invalid.mobile");
        ok = false;
    }
    if s.len() != 10 {
        errors.push("invalid.mobile");
        ok = false;
    }
    ok.then_some(s)
}

fn check_registration_number(value: Option<&Value>, errors: &mut ErrorList<'_>) -> Option<i32> {
    if is_blank(value) {
        errors.push("blank.registration_number");
        return None;
    }
    let n = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match n {
        Some(n) if n > 0 && n <= i32::MAX as i64 => Some(n as i32),
        _ => {
            errors.push("invalid.registration_number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(body: Value) -> Result<StudentDraft, Vec<String>> {
        StudentValidator::validate(&body, &Translator::english())
    }

    fn valid_body() -> Value {
        json!({
            "lastname": "Doe",
            "firstname": "John",
            "gender": 1,
            "email": "j@x.com",
            "mobile": "1234567890",
            "registrationNumber": 5
        })
    }

    #[test]
    fn accepts_valid_submission() {
        let draft = validate(valid_body()).unwrap();
        assert_eq!(draft.lastname, "Doe");
        assert_eq!(draft.gender, 1);
        assert_eq!(draft.mobile, "1234567890");
        assert_eq!(draft.registration_number, 5);
    }

    #[test]
    fn empty_submission_reports_every_blank_field_in_order() {
        let errors = validate(json!({})).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Lastname should not be blank",
                "Firstname should not be blank",
                "Gender should not be blank",
                "Email should not be blank",
                "Mobile should not be blank",
                "Registration number should not be blank",
            ]
        );
    }

    #[test]
    fn non_object_submission_yields_fallback_message() {
        let errors = validate(json!([1, 2])).unwrap_err();
        assert_eq!(errors, vec!["Data not valid"]);
        let errors = validate(Value::Null).unwrap_err();
        assert_eq!(errors, vec!["Data not valid"]);
    }

    #[test]
    fn name_rejects_digits_and_punctuation() {
        let mut body = valid_body();
        body["lastname"] = json!("D0e");
        body["firstname"] = json!("Jo_hn");
        let errors = validate(body).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Lastname must contain only letters and spaces",
                "Firstname must contain only letters and spaces",
            ]
        );
    }

    #[test]
    fn name_accepts_spaces() {
        let mut body = valid_body();
        body["lastname"] = json!("Van Der Berg");
        assert!(validate(body).is_ok());
    }

    #[test]
    fn gender_must_be_one_or_two() {
        let mut body = valid_body();
        body["gender"] = json!(3);
        let errors = validate(body).unwrap_err();
        assert_eq!(errors, vec!["Gender must be 1 or 2"]);

        let mut body = valid_body();
        body["gender"] = json!("2");
        assert_eq!(validate(body).unwrap().gender, 2);
    }

    #[test]
    fn email_checked_against_html5_grammar() {
        for bad in ["plainaddress", "a@", "@x.com", "a b@x.com"] {
            let mut body = valid_body();
            body["email"] = json!(bad);
            let errors = validate(body).unwrap_err();
            assert_eq!(errors, vec!["Email is not a valid email address"], "{bad}");
        }
        let mut body = valid_body();
        body["email"] = json!("first.last@sub.example.org");
        assert!(validate(body).is_ok());
    }

    #[test]
    fn mobile_must_be_ten_digits() {
        let mut body = valid_body();
        body["mobile"] = json!("12345");
        let errors = validate(body).unwrap_err();
        assert_eq!(errors, vec!["Mobile must be exactly 10 digits"]);

        let mut body = valid_body();
        body["mobile"] = json!("12a4567890");
        let errors = validate(body).unwrap_err();
        assert_eq!(errors, vec!["Mobile must be exactly 10 digits"]);
    }

    #[test]
    fn mobile_failing_both_rules_reports_once() {
        let mut body = valid_body();
        body["mobile"] = json!("12a45");
        let errors = validate(body).unwrap_err();
        assert_eq!(errors, vec!["Mobile must be exactly 10 digits"]);
    }

    #[test]
    fn registration_number_strictly_positive() {
        for bad in [json!(0), json!(-5), json!("abc"), json!(2.5)] {
            let mut body = valid_body();
            body["registrationNumber"] = bad.clone();
            let errors = validate(body).unwrap_err();
            assert_eq!(
                errors,
                vec!["Registration number must be a positive integer"],
                "{bad}"
            );
        }
    }

    #[test]
    fn unknown_fields_rejected_once() {
        let mut body = valid_body();
        body["nickname"] = json!("jd");
        body["age"] = json!(20);
        let errors = validate(body).unwrap_err();
        assert_eq!(errors, vec!["This form should not contain extra fields"]);
    }

    #[test]
    fn blank_and_invalid_do_not_stack_per_field() {
        let mut body = valid_body();
        body["email"] = json!("   ");
        let errors = validate(body).unwrap_err();
        assert_eq!(errors, vec!["Email should not be blank"]);
    }
}
