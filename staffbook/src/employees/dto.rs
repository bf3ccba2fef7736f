//! Request and response payloads for `/api/employee`.
//!
//! Request fields are all `Option` so that a missing value reaches validation
//! (and the mapper's null handling) instead of failing deserialization.

use crate::Mappable;
use crate::validation::{Validatable, ValidationErrors, validators};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

const MAX_TEXT: usize = 100;
const MIN_AGE: i32 = 0;
const MAX_AGE: i32 = 120;

/// Body of `POST /api/employee`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Mappable)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub address: Option<String>,
    /// Ten digits
    pub cel: Option<String>,
    pub email: Option<String>,
}

impl Validatable for EmployeeCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::required(
            "name",
            self.name.as_deref(),
            "Name is required.",
        ));
        errors.check(validators::required(
            "lastName",
            self.last_name.as_deref(),
            "Last name is required.",
        ));
        errors.check(validators::required(
            "email",
            self.email.as_deref(),
            "Email is required.",
        ));
        check_optional_fields(
            &mut errors,
            &OptionalFields {
                name: self.name.as_deref(),
                last_name: self.last_name.as_deref(),
                age: self.age,
                address: self.address.as_deref(),
                cel: self.cel.as_deref(),
                email: self.email.as_deref(),
            },
            &CREATE_MESSAGES,
        );
        errors.result()
    }
}

/// Body of `PUT /api/employee/{id}`; replaces every editable field
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Mappable)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    /// Must equal the id in the route
    #[serde(default)]
    pub id: i32,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub cel: Option<String>,
    pub email: Option<String>,
}

impl Validatable for EmployeeUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::range(
            "id",
            self.id,
            1,
            i32::MAX,
            "The Id must be greater than 0.",
        ));
        errors.check(validators::required(
            "name",
            self.name.as_deref(),
            "The name is required.",
        ));
        errors.check(validators::required(
            "lastName",
            self.last_name.as_deref(),
            "The last name is required.",
        ));
        errors.check(validators::required(
            "email",
            self.email.as_deref(),
            "The email is required.",
        ));
        check_optional_fields(
            &mut errors,
            &OptionalFields {
                name: self.name.as_deref(),
                last_name: self.last_name.as_deref(),
                age: self.age,
                address: self.address.as_deref(),
                cel: self.cel.as_deref(),
                email: self.email.as_deref(),
            },
            &UPDATE_MESSAGES,
        );
        errors.result()
    }
}

/// Body of `PATCH /api/employee/{id}`; only the fields present are applied
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Mappable)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub cel: Option<String>,
    pub email: Option<String>,
}

impl Validatable for EmployeePatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        // Present but blank would overwrite a required column.
        for (field, value, message) in [
            ("name", self.name.as_deref(), "Name is required."),
            (
                "lastName",
                self.last_name.as_deref(),
                "Last name is required.",
            ),
            ("email", self.email.as_deref(), "Email is required."),
        ] {
            if value.is_some() {
                errors.check(validators::required(field, value, message));
            }
        }
        check_optional_fields(
            &mut errors,
            &OptionalFields {
                name: self.name.as_deref(),
                last_name: self.last_name.as_deref(),
                age: self.age,
                address: self.address.as_deref(),
                cel: self.cel.as_deref(),
                email: self.email.as_deref(),
            },
            &CREATE_MESSAGES,
        );
        errors.result()
    }
}

/// Employee as returned by the API
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Mappable)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeOutput {
    pub name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub email: String,
}

struct OptionalFields<'a> {
    name: Option<&'a str>,
    last_name: Option<&'a str>,
    age: Option<i32>,
    address: Option<&'a str>,
    cel: Option<&'a str>,
    email: Option<&'a str>,
}

struct Messages {
    name_length: &'static str,
    last_name_length: &'static str,
    age_range: &'static str,
    address_length: &'static str,
    cel_format: &'static str,
    email_length: &'static str,
    email_format: &'static str,
}

const CREATE_MESSAGES: Messages = Messages {
    name_length: "The name cannot exceed 100 characters.",
    last_name_length: "Last name cannot exceed 100 characters.",
    age_range: "Age must be between 0 and 120.",
    address_length: "The address cannot exceed 100 characters.",
    cel_format: "The cell phone number must have exactly 10 digits.",
    email_length: "The email address cannot exceed 100 characters.",
    email_format: "The email address is not in a valid format.",
};

const UPDATE_MESSAGES: Messages = Messages {
    name_length: "The name cannot exceed 100 characters.",
    last_name_length: "The last name cannot exceed 100 characters.",
    age_range: "The age must be between 0 and 120.",
    address_length: "The address cannot exceed 100 characters.",
    cel_format: "The cell phone number must have exactly 10 digits.",
    email_length: "The email cannot exceed 100 characters.",
    email_format: "The email is not in a valid format.",
};

/// Rules that apply only when the value is present.
fn check_optional_fields(
    errors: &mut ValidationErrors,
    fields: &OptionalFields<'_>,
    messages: &Messages,
) {
    if let Some(name) = fields.name {
        errors.check(validators::max_length(
            "name",
            name,
            MAX_TEXT,
            messages.name_length,
        ));
    }
    if let Some(last_name) = fields.last_name {
        errors.check(validators::max_length(
            "lastName",
            last_name,
            MAX_TEXT,
            messages.last_name_length,
        ));
    }
    if let Some(age) = fields.age {
        errors.check(validators::range(
            "age",
            age,
            MIN_AGE,
            MAX_AGE,
            messages.age_range,
        ));
    }
    if let Some(address) = fields.address {
        errors.check(validators::max_length(
            "address",
            address,
            MAX_TEXT,
            messages.address_length,
        ));
    }
    if let Some(cel) = fields.cel {
        errors.check(validators::cell_phone("cel", cel, messages.cel_format));
    }
    if let Some(email) = fields.email {
        errors.check(validators::max_length(
            "email",
            email,
            MAX_TEXT,
            messages.email_length,
        ));
        errors.check(validators::email("email", email, messages.email_format));
    }
}
