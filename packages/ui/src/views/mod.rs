mod employee_list;
pub use employee_list::EmployeeListView;

mod create_employee;
pub use create_employee::CreateEmployeeView;

mod edit_employee;
pub use edit_employee::EditEmployeeView;

mod login;
pub use login::LoginView;

mod not_found;
pub use not_found::NotFoundView;
