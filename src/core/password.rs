use crate::core::validation::FieldErrors;
use crate::models::ChangePasswordRequest;
use validator::Validate;

pub const REQUIRED_MESSAGE: &str = "Required";
pub const MISMATCH_MESSAGE: &str = "Password & Confirm Password Must be same";
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 30;

const FIELDS: [&str; 3] = ["current_password", "new_password", "confirm_new_password"];

fn value_of<'a>(request: &'a ChangePasswordRequest, field: &str) -> &'a str {
    match field {
        "current_password" => &request.current_password,
        "new_password" => &request.new_password,
        "confirm_new_password" => &request.confirm_new_password,
        _ => "",
    }
}

fn length_message(field: &str, value: &str) -> String {
    if value.chars().count() > MAX_PASSWORD_LEN {
        format!("{} must be at most {} characters", field, MAX_PASSWORD_LEN)
    } else {
        format!("{} must be at least {} characters", field, MIN_PASSWORD_LEN)
    }
}

/// Check a change-password form, one message per failing field
///
/// Emptiness is reported as "Required" ahead of any length or match problem.
/// The confirmation is only compared once a new password has been entered.
pub fn validate_change_password(request: &ChangePasswordRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    for field in FIELDS {
        if value_of(request, field).is_empty() {
            errors.add(field, REQUIRED_MESSAGE);
        }
    }

    if let Err(report) = request.validate() {
        for (field, field_errors) in report.field_errors() {
            let field: &str = &field;
            let value = value_of(request, field);

            // length problems outrank a mismatch
            let mut codes: Vec<&str> = field_errors.iter().map(|e| &*e.code).collect();
            codes.sort_by_key(|code| *code == "must_match");

            for code in codes {
                match code {
                    "length" => errors.add(field, length_message(field, value)),
                    "must_match" if !request.new_password.is_empty() => {
                        errors.add(field, MISMATCH_MESSAGE)
                    }
                    _ => {}
                }
            }
        }
    }

    errors.into_result()
}
