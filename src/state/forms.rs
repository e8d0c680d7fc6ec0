//! Field sets for the login, registration, and post forms.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::util::form::{FormField, FormValues};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Username,
    Password,
}

impl FormField for LoginField {
    const ALL: &'static [Self] = &[Self::Username, Self::Password];

    fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField for RegisterField {
    const ALL: &'static [Self] = &[Self::Username, Self::Email, Self::Password, Self::ConfirmPassword];

    fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PostField {
    Body,
}

impl FormField for PostField {
    const ALL: &'static [Self] = &[Self::Body];

    fn name(self) -> &'static str {
        match self {
            Self::Body => "body",
        }
    }
}

/// Blank login form.
pub fn login_form() -> FormValues<LoginField> {
    FormValues::empty()
}

/// Blank registration form.
pub fn register_form() -> FormValues<RegisterField> {
    FormValues::empty()
}

/// Blank post form.
pub fn post_form() -> FormValues<PostField> {
    FormValues::empty()
}
