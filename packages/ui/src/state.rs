//! # View state machines
//!
//! Each screen keeps one model in a signal. The model is a tagged state, not a
//! bag of booleans, so combinations such as "loading while saving" or
//! "deleting with no candidate" cannot be represented.
//!
//! | Model | States |
//! |-------|--------|
//! | [`ListModel`] | `Loading → Ready \| Failed`; dialog `Closed → Confirming(id) → Deleting(id) → Closed` |
//! | [`CreateModel`] | `Editing ⇄ Submitting` |
//! | [`EditModel`] | `Loading → Editing ⇄ Saving`, or `Loading → Abandoned` |
//!
//! Transitions that finish a request return an [`Effect`]: the notice to
//! show and whether to go back to the list. Views execute it with
//! [`crate::notify::show_effect`]. The models never touch signals or the
//! network, so they are tested directly.

use api::{ApiError, ApiResult, Employee, EmployeeUpdate, NewEmployee, PasswordChange};

use crate::notify::Notice;

/// What a finished request asks the view to do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effect {
    pub notice: Option<Notice>,
    pub back_to_list: bool,
}

impl Effect {
    pub fn none() -> Self {
        Self::default()
    }

    fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            back_to_list: false,
        }
    }

    fn and_back_to_list(mut self) -> Self {
        self.back_to_list = true;
        self
    }
}

/// A form input shared by the create and edit screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    FirstName,
    LastName,
    Mail,
    Password,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Mail,
        EmployeeField::Password,
    ];

    /// `id`/`name` of the input, matching the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Mail => "mail",
            Self::Password => "password",
        }
    }

    /// Native input type.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Mail => "email",
            Self::Password => "password",
            Self::FirstName | Self::LastName => "text",
        }
    }
}

fn log_failure(action: &str, err: &ApiError) {
    tracing::error!("Failed to {}: {}", action, err);
}

// ============================================================================
// List
// ============================================================================

/// Whether the employee collection has been fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListPhase {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Delete confirmation dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteDialog {
    #[default]
    Closed,
    /// Dialog open, `id` is the pending-delete candidate.
    Confirming(i64),
    /// Delete request for `id` in flight.
    Deleting(i64),
}

/// State of the employee list screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListModel {
    phase: ListPhase,
    employees: Vec<Employee>,
    dialog: DeleteDialog,
}

impl ListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// Rows in backend order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn dialog(&self) -> DeleteDialog {
        self.dialog
    }

    pub fn pending_delete(&self) -> Option<i64> {
        match self.dialog {
            DeleteDialog::Closed => None,
            DeleteDialog::Confirming(id) | DeleteDialog::Deleting(id) => Some(id),
        }
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.dialog, DeleteDialog::Deleting(_))
    }

    /// Read-all finished. Failure keeps whatever was shown before.
    pub fn list_loaded(&mut self, result: ApiResult<Vec<Employee>>) -> Effect {
        match result {
            Ok(employees) => {
                tracing::debug!("Loaded {} employees", employees.len());
                self.employees = employees;
                self.phase = ListPhase::Ready;
                Effect::none()
            }
            Err(e) => {
                log_failure("load employees", &e);
                self.phase = ListPhase::Failed;
                Effect::notice(Notice::error("Failed to load employees"))
            }
        }
    }

    /// Stage `id` for deletion and open the dialog.
    pub fn request_delete(&mut self, id: i64) {
        if !self.is_deleting() {
            self.dialog = DeleteDialog::Confirming(id);
        }
    }

    /// Close the dialog without a request. Ignored while a delete is in flight.
    pub fn cancel_delete(&mut self) {
        if let DeleteDialog::Confirming(_) = self.dialog {
            self.dialog = DeleteDialog::Closed;
        }
    }

    /// User confirmed: returns the id to delete, or `None` if there is
    /// nothing to confirm (no candidate, or already deleting).
    pub fn confirm_delete(&mut self) -> Option<i64> {
        match self.dialog {
            DeleteDialog::Confirming(id) => {
                self.dialog = DeleteDialog::Deleting(id);
                Some(id)
            }
            DeleteDialog::Closed | DeleteDialog::Deleting(_) => None,
        }
    }

    /// Delete finished. Success drops the row locally; either way the dialog closes.
    pub fn delete_finished(&mut self, result: ApiResult<()>) -> Effect {
        let DeleteDialog::Deleting(id) = self.dialog else {
            return Effect::none();
        };
        self.dialog = DeleteDialog::Closed;

        match result {
            Ok(()) => {
                self.employees.retain(|employee| employee.id != id);
                tracing::info!("Deleted employee {}", id);
                Effect::notice(Notice::success("Employee deleted successfully"))
            }
            Err(e) => {
                log_failure(&format!("delete employee {id}"), &e);
                Effect::notice(Notice::error("Failed to delete employee"))
            }
        }
    }
}

// ============================================================================
// Create
// ============================================================================

/// Form submission state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// State of the create screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateModel {
    draft: NewEmployee,
    phase: FormPhase,
}

impl CreateModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &NewEmployee {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::FirstName => self.draft.first_name = value,
            EmployeeField::LastName => self.draft.last_name = value,
            EmployeeField::Mail => self.draft.mail = value,
            EmployeeField::Password => self.draft.password = value,
        }
    }

    /// Enter `Submitting` and hand out the body to send. `None` while a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<NewEmployee> {
        match self.phase {
            FormPhase::Editing => {
                self.phase = FormPhase::Submitting;
                Some(self.draft.clone())
            }
            FormPhase::Submitting => None,
        }
    }

    /// Create finished. Failure keeps the draft for another attempt.
    pub fn submit_finished(&mut self, result: ApiResult<()>) -> Effect {
        self.phase = FormPhase::Editing;
        match result {
            Ok(()) => {
                tracing::info!("Created employee {}", self.draft.mail);
                self.draft = NewEmployee::default();
                Effect::notice(Notice::success("Employee created successfully")).and_back_to_list()
            }
            Err(e) => {
                log_failure("create employee", &e);
                Effect::notice(Notice::error("Failed to create employee"))
            }
        }
    }
}

// ============================================================================
// Edit
// ============================================================================

/// Edit form contents. The password starts blank; blank means "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub new_password: String,
}

impl From<&Employee> for EditDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            mail: employee.mail.clone(),
            new_password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditPhase {
    #[default]
    Loading,
    Editing,
    Saving,
    /// Fetch failed; the view is on its way back to the list.
    Abandoned,
}

/// State of the edit screen for one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct EditModel {
    id: i64,
    phase: EditPhase,
    draft: EditDraft,
}

impl EditModel {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            phase: EditPhase::Loading,
            draft: EditDraft::default(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    /// The form is shown and accepts input.
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, EditPhase::Editing | EditPhase::Saving)
    }

    pub fn is_saving(&self) -> bool {
        self.phase == EditPhase::Saving
    }

    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        if !self.is_interactive() {
            return;
        }
        match field {
            EmployeeField::FirstName => self.draft.first_name = value,
            EmployeeField::LastName => self.draft.last_name = value,
            EmployeeField::Mail => self.draft.mail = value,
            EmployeeField::Password => self.draft.new_password = value,
        }
    }

    /// Read-one finished. Failure abandons the edit.
    pub fn employee_loaded(&mut self, result: ApiResult<Employee>) -> Effect {
        if self.phase != EditPhase::Loading {
            return Effect::none();
        }
        match result {
            Ok(employee) => {
                if employee.exposes_password() {
                    tracing::warn!(
                        "Backend returned password data for employee {}; discarding it",
                        self.id
                    );
                }
                self.draft = EditDraft::from(&employee);
                self.phase = EditPhase::Editing;
                Effect::none()
            }
            Err(e) => {
                log_failure(&format!("load employee {}", self.id), &e);
                self.phase = EditPhase::Abandoned;
                Effect::notice(Notice::error("Failed to load employee data")).and_back_to_list()
            }
        }
    }

    /// Enter `Saving` and build the update body. `None` unless editing.
    pub fn begin_submit(&mut self) -> Option<EmployeeUpdate> {
        if self.phase != EditPhase::Editing {
            return None;
        }
        self.phase = EditPhase::Saving;
        Some(EmployeeUpdate {
            id: self.id,
            first_name: self.draft.first_name.clone(),
            last_name: self.draft.last_name.clone(),
            mail: self.draft.mail.clone(),
            password: PasswordChange::from_input(&self.draft.new_password),
        })
    }

    /// Update finished. Failure keeps the draft.
    pub fn submit_finished(&mut self, result: ApiResult<()>) -> Effect {
        if self.phase != EditPhase::Saving {
            return Effect::none();
        }
        self.phase = EditPhase::Editing;
        match result {
            Ok(()) => {
                tracing::info!("Updated employee {}", self.id);
                Effect::notice(Notice::success("Employee updated successfully")).and_back_to_list()
            }
            Err(e) => {
                log_failure(&format!("update employee {}", self.id), &e);
                Effect::notice(Notice::error("Failed to update employee"))
            }
        }
    }
}
