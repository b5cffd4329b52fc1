//! Wire types shared by the client and every view.

pub mod employee;

pub use employee::{Employee, EmployeeUpdate, NewEmployee, PasswordChange};
