use super::*;
use super::schemas::{CLASS_NAME, CLASSNAME, EMAIL, FULLNAME, INPUT_CLASS, INPUT_MEMBER, LOGIN, PASSWORD, ROLE};

fn login_draft(password: &str) -> FormDraft {
    FormDraft::new().with(EMAIL, "admin@mentutor.test").with(PASSWORD, password)
}

fn member_draft() -> FormDraft {
    FormDraft::new()
        .with(FULLNAME, "Budi Santoso")
        .with(EMAIL, "budi@mentutor.test")
        .with(ROLE, "mentee")
        .with(CLASSNAME, "2")
        .with(PASSWORD, "Secret#123")
}

// =============================================================
// Check predicates
// =============================================================

#[test]
fn required_rejects_only_empty() {
    assert!(!Check::Required.passes(""));
    assert!(Check::Required.passes(" "));
}

#[test]
fn length_bounds_count_characters() {
    assert!(Check::MinLen(3).passes("äöü"));
    assert!(!Check::MinLen(3).passes("ab"));
    assert!(Check::MaxLen(3).passes("abc"));
    assert!(!Check::MaxLen(3).passes("abcd"));
}

#[test]
fn email_check_accepts_common_addresses() {
    assert!(Check::Email.passes("budi@mentutor.test"));
    assert!(Check::Email.passes("first.last+tag@sub.example.co.id"));
}

#[test]
fn email_check_rejects_malformed_addresses() {
    assert!(!Check::Email.passes("budi"));
    assert!(!Check::Email.passes("budi@"));
    assert!(!Check::Email.passes("@mentutor.test"));
    assert!(!Check::Email.passes("budi santoso@mentutor.test"));
}

#[test]
fn character_class_checks() {
    assert!(Check::HasUppercase.passes("abcD"));
    assert!(!Check::HasUppercase.passes("abcd"));
    assert!(Check::HasDigit.passes("abc1"));
    assert!(!Check::HasDigit.passes("abcd"));
    for c in SPECIAL_CHARS {
        assert!(Check::HasSpecial.passes(&format!("abc{c}")), "{c}");
    }
    assert!(!Check::HasSpecial.passes("abc-_+?"));
}

// =============================================================
// Login schema: five password rules
// =============================================================

#[test]
fn password_satisfying_all_rules_passes() {
    assert_eq!(LOGIN.validate(&login_draft("Mentutor#2024")), Ok(()));
}

#[test]
fn password_too_short_fails() {
    let errors = LOGIN.validate(&login_draft("Ab#1")).unwrap_err();
    assert_eq!(errors.get(PASSWORD), Some(&"password must be 8 characters"));
}

#[test]
fn password_too_long_fails() {
    let long = format!("Ab#1{}", "x".repeat(27));
    let errors = LOGIN.validate(&login_draft(&long)).unwrap_err();
    assert_eq!(errors.get(PASSWORD), Some(&"password must not exceed 30 characters"));
}

#[test]
fn password_without_uppercase_fails() {
    let errors = LOGIN.validate(&login_draft("mentutor#2024")).unwrap_err();
    assert_eq!(errors.get(PASSWORD), Some(&"password must contain one uppercase"));
}

#[test]
fn password_without_digit_fails() {
    let errors = LOGIN.validate(&login_draft("Mentutor#abcd")).unwrap_err();
    assert_eq!(errors.get(PASSWORD), Some(&"password must contain one number"));
}

#[test]
fn password_without_special_fails() {
    let errors = LOGIN.validate(&login_draft("Mentutor2024")).unwrap_err();
    assert_eq!(errors.get(PASSWORD), Some(&"password must contain one special character"));
}

#[test]
fn login_reports_every_failing_field() {
    let errors = LOGIN.validate(&FormDraft::new()).unwrap_err();
    assert_eq!(errors.get(EMAIL), Some(&"Email is required"));
    assert_eq!(errors.get(PASSWORD), Some(&"Password is required"));
}

// =============================================================
// InputMember / InputClass schemas
// =============================================================

#[test]
fn member_draft_with_valid_fields_passes() {
    assert_eq!(INPUT_MEMBER.validate(&member_draft()), Ok(()));
}

#[test]
fn member_email_must_be_an_address() {
    let draft = member_draft().with(EMAIL, "not-an-email");
    let errors = INPUT_MEMBER.validate(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(EMAIL), Some(&"Email is invalid"));
}

#[test]
fn member_fullname_needs_uppercase() {
    let draft = member_draft().with(FULLNAME, "budi santoso");
    let errors = INPUT_MEMBER.validate(&draft).unwrap_err();
    assert_eq!(errors.get(FULLNAME), Some(&"Fullname must contain one uppercase"));
}

#[test]
fn member_role_and_class_are_required() {
    let draft = member_draft().with(ROLE, "").with(CLASSNAME, "");
    let errors = INPUT_MEMBER.validate(&draft).unwrap_err();
    assert_eq!(errors.get(ROLE), Some(&"Role is required"));
    assert_eq!(errors.get(CLASSNAME), Some(&"Class is required"));
}

#[test]
fn class_name_bounds() {
    assert!(INPUT_CLASS.validate(&FormDraft::new().with(CLASS_NAME, "Backend Batch 12")).is_ok());
    let errors = INPUT_CLASS.validate(&FormDraft::new().with(CLASS_NAME, "BE")).unwrap_err();
    assert_eq!(errors.get(CLASS_NAME), Some(&"Class name is too short"));
}

// =============================================================
// FormDraft / required_fields
// =============================================================

#[test]
fn draft_get_defaults_to_empty() {
    let mut draft = FormDraft::new().with(EMAIL, "x");
    assert_eq!(draft.get(EMAIL), "x");
    assert_eq!(draft.get(PASSWORD), "");
    draft.clear();
    assert_eq!(draft.get(EMAIL), "");
}

#[test]
fn required_fields_follow_table_order() {
    assert_eq!(LOGIN.required_fields(), vec![EMAIL, PASSWORD]);
    assert_eq!(INPUT_MEMBER.required_fields(), vec![EMAIL, FULLNAME, PASSWORD, ROLE, CLASSNAME]);
}
