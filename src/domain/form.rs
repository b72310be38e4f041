use super::contact::{
    ContactInfo, FieldError, FieldResult, validate_address, validate_email, validate_full_name,
    validate_phone,
};
use serde::Serialize;
use std::fmt;

/// The inputs of the checkout form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Phone,
    Email,
    Address,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FullName, Field::Phone, Field::Email, Field::Address];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::Address => "Address",
        }
    }
}

/// Per-field validation failures, kept in field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormErrors {
    errors: Vec<(Field, FieldError)>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, error)| error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, FieldError)> {
        self.errors.iter()
    }

    fn push(&mut self, field: Field, error: FieldError) {
        self.errors.push((field, error));
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.label(), error)?;
            first = false;
        }
        Ok(())
    }
}

/// Plain form state: the raw text the buyer typed into each input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    full_name: String,
    phone: String,
    email: String,
    address: String,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Address => self.address = value,
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Address => &self.address,
        }
    }

    pub fn validate_field(&self, field: Field) -> FieldResult {
        let value = self.value(field);
        match field {
            Field::FullName => validate_full_name(value),
            Field::Phone => validate_phone(value),
            Field::Email => validate_email(value),
            Field::Address => validate_address(value),
        }
    }

    /// Runs every field validator and, when all pass, produces fresh contact details.
    pub fn validate(&self) -> Result<ContactInfo, FormErrors> {
        let mut errors = FormErrors::default();
        for field in Field::ALL {
            if let Err(error) = self.validate_field(field) {
                errors.push(field, error);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactInfo {
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: (!self.address.is_empty()).then(|| self.address.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::FieldErrorKind;

    fn filled_form() -> CheckoutForm {
        CheckoutForm::new()
            .with(Field::FullName, "Juan Perez")
            .with(Field::Phone, "926384679")
            .with(Field::Email, "jperez@tecsup.edu.pe")
    }

    #[test]
    fn test_valid_form_produces_contact() {
        let contact = filled_form().with(Field::Address, "Los123").validate().unwrap();
        assert_eq!(contact.full_name, "Juan Perez");
        assert_eq!(contact.address.as_deref(), Some("Los123"));
    }

    #[test]
    fn test_empty_address_is_absent() {
        let contact = filled_form().validate().unwrap();
        assert_eq!(contact.address, None);
    }

    #[test]
    fn test_empty_form_reports_required_fields_in_order() {
        let errors = CheckoutForm::new().validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, vec![Field::FullName, Field::Phone, Field::Email]);
        assert!(
            errors
                .iter()
                .all(|(_, error)| error.kind == FieldErrorKind::Required)
        );
    }

    #[test]
    fn test_single_invalid_field() {
        let errors = filled_form()
            .with(Field::Address, "Los #123")
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Address).unwrap().kind,
            FieldErrorKind::Pattern
        );
        assert!(errors.get(Field::Phone).is_none());
    }

    #[test]
    fn test_errors_display() {
        let errors = filled_form()
            .with(Field::Phone, "12345")
            .validate()
            .unwrap_err();
        assert_eq!(errors.to_string(), "Phone: At least 6 digits");
    }
}
