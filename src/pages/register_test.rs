use super::*;

#[test]
fn register_fields_are_name_email_password() {
    let form = register_fields();
    assert_eq!(form.value(FIELD_NAME), "");
    assert_eq!(form.value(FIELD_EMAIL), "");
    assert_eq!(form.value(FIELD_PASSWORD), "");
}

#[test]
fn build_payload_trims_name_and_email_only() {
    let mut form = register_fields();
    form.set(FIELD_NAME, " Ada ");
    form.set(FIELD_EMAIL, " ada@example.com ");
    form.set(FIELD_PASSWORD, "pass word ");
    let payload = build_register_payload(&form).expect("valid form");
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.email, "ada@example.com");
    assert_eq!(payload.password, "pass word ");
}

#[test]
fn build_payload_requires_every_field() {
    let mut form = register_fields();
    form.set(FIELD_NAME, "Ada");
    form.set(FIELD_EMAIL, "ada@example.com");
    assert_eq!(
        build_register_payload(&form),
        Err("Enter name, email, and password.")
    );

    form.set(FIELD_PASSWORD, "hunter2");
    assert!(build_register_payload(&form).is_ok());
}
