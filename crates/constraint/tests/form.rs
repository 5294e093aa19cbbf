//! Validating whole records with groups, key paths and built-in predicates.

use pretty_assertions::assert_eq;
use rampart_constraint::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignUpError {
    UsernameLength,
    UsernameCharacters,
    Email,
    PasswordLength,
    PasswordDigit,
    PasswordMismatch,
    Website,
    BirthDate,
    Age,
    MissingAge,
    Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PasswordRule {
    Length,
    Digit,
}

#[derive(Debug, Clone)]
struct SignUp {
    username: String,
    email: String,
    password: String,
    confirmation: String,
    website: String,
    birth_date: String,
    age: Option<u8>,
    role: String,
}

impl SignUp {
    fn valid() -> Self {
        Self {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "analytical1".into(),
            confirmation: "analytical1".into(),
            website: "https://example.com".into(),
            birth_date: "1815-12-10".into(),
            age: Some(36),
            role: "editor".into(),
        }
    }
}

fn password_rules() -> CompoundConstraint<str, PasswordRule> {
    all_of![
        min_length(8).with_error(PasswordRule::Length),
        CharacterSet::ascii_digits().loose().with_error(PasswordRule::Digit),
    ]
}

fn sign_up_form() -> Result<TypeConstraint<SignUp, SignUpError>, BuildError> {
    let username = all_of![
        length_between(3, 16)?.with_error(SignUpError::UsernameLength),
        Pattern::new("[a-z0-9_]+")?.with_error(SignUpError::UsernameCharacters),
    ];
    let age = between(13_u8, 130)?
        .with_error(SignUpError::Age)
        .required(SignUpError::MissingAge);

    Ok(GroupConstraint::all_of()
        .named_field("username", |f: &SignUp| f.username.as_str(), username)
        .named_field("email", |f: &SignUp| f.email.as_str(), email().with_error(SignUpError::Email))
        .named_field(
            "password",
            |f: &SignUp| f.password.as_str(),
            password_rules().map_err(|rule| match rule {
                PasswordRule::Length => SignUpError::PasswordLength,
                PasswordRule::Digit => SignUpError::PasswordDigit,
            }),
        )
        .constraint(rule(
            |f: &SignUp| pair_matching().evaluate(&(f.password.as_str(), f.confirmation.as_str())),
            SignUpError::PasswordMismatch,
        ))
        .named_field(
            "website",
            |f: &SignUp| f.website.as_str(),
            rule(|s: &str| s.is_empty(), SignUpError::Website)
                .or(UrlFormat::web().with_error(SignUpError::Website)),
        )
        .named_field(
            "birth_date",
            |f: &SignUp| f.birth_date.as_str(),
            DateFormat::iso_date().with_error(SignUpError::BirthDate),
        )
        .named_field("age", |f: &SignUp| &f.age, age)
        .named_field(
            "role",
            |f: &SignUp| &f.role,
            one_of(["admin".to_owned(), "editor".to_owned()]).with_error(SignUpError::Role),
        ))
}

#[test]
fn valid_form_passes() -> Result<(), BuildError> {
    let form = sign_up_form()?;
    assert_eq!(form.evaluate(&SignUp::valid()), Ok(()));
    Ok(())
}

#[test]
fn fields_are_registered_in_order() -> Result<(), BuildError> {
    let form = sign_up_form()?;
    assert_eq!(
        form.field_names().collect::<Vec<_>>(),
        vec!["username", "email", "password", "website", "birth_date", "age", "role"]
    );
    assert_eq!(form.len(), 8);
    Ok(())
}

#[test]
fn single_failing_field_reports_only_that_field() -> Result<(), BuildError> {
    let form = sign_up_form()?;
    let mut input = SignUp::valid();
    input.email = "not-an-email".into();
    assert_eq!(form.evaluate(&input).unwrap_err().errors(), &[SignUpError::Email]);
    Ok(())
}

#[test]
fn every_failure_is_reported_in_registration_order() -> Result<(), BuildError> {
    let form = sign_up_form()?;
    let input = SignUp {
        username: "A!".into(),
        email: "nope".into(),
        password: "short".into(),
        confirmation: "different".into(),
        website: "ftp://example.com".into(),
        birth_date: "2023-02-30".into(),
        age: None,
        role: "guest".into(),
    };
    assert_eq!(
        form.evaluate(&input).unwrap_err().into_vec(),
        vec![
            SignUpError::UsernameLength,
            SignUpError::UsernameCharacters,
            SignUpError::Email,
            SignUpError::PasswordLength,
            SignUpError::PasswordDigit,
            SignUpError::PasswordMismatch,
            SignUpError::Website,
            SignUpError::BirthDate,
            SignUpError::MissingAge,
            SignUpError::Role,
        ]
    );
    Ok(())
}

#[test]
fn empty_website_is_tolerated() -> Result<(), BuildError> {
    let form = sign_up_form()?;
    let mut input = SignUp::valid();
    input.website.clear();
    assert!(form.evaluate(&input).is_ok());
    Ok(())
}

#[test]
fn optional_age_out_of_range() -> Result<(), BuildError> {
    let form = sign_up_form()?;
    let mut input = SignUp::valid();
    input.age = Some(9);
    assert_eq!(form.evaluate(&input).unwrap_err().errors(), &[SignUpError::Age]);
    Ok(())
}

#[test]
fn any_of_group_needs_one_contact() -> Result<(), BuildError> {
    #[derive(Debug)]
    struct Contact {
        email: String,
        phone: String,
    }

    let contact: GroupConstraint<Contact, &str> = GroupConstraint::any_of()
        .named_field("email", |c: &Contact| c.email.as_str(), email().with_error("email"))
        .named_field(
            "phone",
            |c: &Contact| c.phone.as_str(),
            Pattern::new(r"\+?[0-9 ]{7,15}")?.with_error("phone"),
        );

    let phone_only = Contact {
        email: String::new(),
        phone: "+44 20 7946 0958".into(),
    };
    assert!(contact.evaluate(&phone_only).is_ok());

    let neither = Contact {
        email: "x".into(),
        phone: "y".into(),
    };
    assert_eq!(contact.evaluate(&neither).unwrap_err().errors(), &["phone"]);
    Ok(())
}

#[test]
fn invalid_configuration_fails_fast() {
    assert!(matches!(Pattern::new("[unclosed"), Err(BuildError::InvalidPattern { .. })));
    assert!(matches!(length_between(9, 2), Err(BuildError::InvalidBounds { .. })));
    assert!(matches!(date_format("%Q"), Err(BuildError::InvalidFormat(_))));
}

#[test]
fn summary_serializes_for_api_responses() {
    #[derive(Debug, Clone, serde::Serialize)]
    #[serde(rename_all = "snake_case")]
    enum ApiError {
        TooShort,
    }

    let summary = min_length(3).with_error(ApiError::TooShort).evaluate("a").unwrap_err();
    assert_eq!(serde_json::to_string(&summary).unwrap(), r#"["too_short"]"#);
}
