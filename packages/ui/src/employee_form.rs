use dioxus::prelude::*;

use api::NewEmployee;

use crate::state::{EditDraft, EmployeeField};

/// Current values of the four inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub password: String,
}

impl FieldValues {
    fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::Mail => &self.mail,
            EmployeeField::Password => &self.password,
        }
    }
}

impl From<&NewEmployee> for FieldValues {
    fn from(draft: &NewEmployee) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            mail: draft.mail.clone(),
            password: draft.password.clone(),
        }
    }
}

impl From<&EditDraft> for FieldValues {
    fn from(draft: &EditDraft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            mail: draft.mail.clone(),
            password: draft.new_password.clone(),
        }
    }
}

struct FieldRow {
    field: EmployeeField,
    label: String,
    value: String,
    required: bool,
    placeholder: String,
}

/// The first name / last name / email / password inputs shared by the
/// create and edit screens. Each edit is reported through `on_input`.
///
/// Only the browser's `required` check applies; nothing else is validated here.
#[component]
pub fn EmployeeFields(
    values: FieldValues,
    on_input: EventHandler<(EmployeeField, String)>,
    #[props(default = "Password".to_string())] password_label: String,
    #[props(default = true)] password_required: bool,
    #[props(default)] password_placeholder: String,
) -> Element {
    let rows: Vec<FieldRow> = EmployeeField::ALL
        .into_iter()
        .map(|field| {
            let is_password = field == EmployeeField::Password;
            FieldRow {
                field,
                label: match field {
                    EmployeeField::FirstName => "First Name".to_string(),
                    EmployeeField::LastName => "Last Name".to_string(),
                    EmployeeField::Mail => "Email".to_string(),
                    EmployeeField::Password => password_label.clone(),
                },
                value: values.get(field).to_string(),
                required: !is_password || password_required,
                placeholder: if is_password {
                    password_placeholder.clone()
                } else {
                    String::new()
                },
            }
        })
        .collect();

    rsx! {
        for row in rows {
            div {
                key: "{row.field.name()}",
                class: "form-field",
                label { r#for: row.field.name(), "{row.label}" }
                input {
                    id: row.field.name(),
                    name: row.field.name(),
                    r#type: row.field.input_type(),
                    required: row.required,
                    placeholder: "{row.placeholder}",
                    value: "{row.value}",
                    oninput: move |evt: FormEvent| on_input.call((row.field, evt.value())),
                }
            }
        }
    }
}
