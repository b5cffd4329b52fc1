mod guarded;
pub use guarded::Guarded;

mod login;
pub use login::Login;

mod employees;
pub use employees::{CreateEmployee, EditEmployee, Employees};

mod not_found;
pub use not_found::NotFound;
