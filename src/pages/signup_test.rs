use super::*;

fn filled() -> SignupForm {
    SignupForm {
        first_name: " Hana ".to_owned(),
        last_name: "Girma".to_owned(),
        email: "hana@aastu.edu.et".to_owned(),
        password: "longenough".to_owned(),
        confirm_password: "longenough".to_owned(),
        role: Some(Role::Student),
        department: "Software Engineering".to_owned(),
        student_id: "ETS0123/12".to_owned(),
        terms_accepted: true,
    }
}

#[test]
fn complete_form_builds_request() {
    let request = filled().validate();
    let Ok(request) = request else {
        panic!("expected valid form, got {request:?}");
    };
    assert_eq!(request.first_name, "Hana");
    assert_eq!(request.role, Role::Student);
    assert_eq!(request.student_id.as_deref(), Some("ETS0123/12"));
    assert_eq!(request.password_confirmation, "longenough");
}

#[test]
fn missing_fields_are_reported_first() {
    let form = SignupForm {
        last_name: "  ".to_owned(),
        password: "short".to_owned(),
        ..filled()
    };
    assert_eq!(form.validate(), Err("Please fill in all required fields"));
}

#[test]
fn passwords_must_match() {
    let form = SignupForm {
        confirm_password: "different1".to_owned(),
        ..filled()
    };
    assert_eq!(form.validate(), Err("Passwords do not match"));
}

#[test]
fn password_needs_eight_characters() {
    let form = SignupForm {
        password: "seven77".to_owned(),
        confirm_password: "seven77".to_owned(),
        ..filled()
    };
    assert_eq!(form.validate(), Err("Password must be at least 8 characters long"));
}

#[test]
fn department_is_required() {
    let form = SignupForm {
        department: String::new(),
        ..filled()
    };
    assert_eq!(form.validate(), Err("Please select a department"));
}

#[test]
fn terms_must_be_accepted() {
    let form = SignupForm {
        terms_accepted: false,
        ..filled()
    };
    assert_eq!(
        form.validate(),
        Err("Please accept the Terms of Service and Privacy Policy")
    );
}

#[test]
fn teachers_do_not_send_student_id() {
    let form = SignupForm {
        role: Some(Role::Teacher),
        ..filled()
    };
    assert_eq!(form.validate().map(|r| r.student_id), Ok(None));
}
