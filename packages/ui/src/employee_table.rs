use api::Employee;
use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaPen, FaTrash};

/// Body of the list screen: a loading line, the empty message, or the table.
#[component]
pub fn EmployeeRoster(
    loading: bool,
    employees: Vec<Employee>,
    on_edit: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    if loading {
        return rsx! {
            div { class: "empty-state", "Loading employees..." }
        };
    }
    if employees.is_empty() {
        return rsx! {
            div { class: "empty-state", "No employees found. Add your first employee!" }
        };
    }

    rsx! {
        EmployeeTable { employees, on_edit, on_delete }
    }
}

/// One row per employee, in the order given. Values are shown verbatim.
#[component]
pub fn EmployeeTable(
    employees: Vec<Employee>,
    on_edit: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    rsx! {
        table {
            class: "employee-table",
            thead {
                tr {
                    th { "ID" }
                    th { "First Name" }
                    th { "Last Name" }
                    th { "Email" }
                    th { class: "text-right", "Actions" }
                }
            }
            tbody {
                for employee in employees {
                    tr {
                        key: "{employee.id}",
                        td { "{employee.id}" }
                        td { "{employee.first_name}" }
                        td { "{employee.last_name}" }
                        td { "{employee.mail}" }
                        td {
                            class: "text-right",
                            div {
                                class: "row-actions",
                                button {
                                    class: "btn btn-outline btn-icon",
                                    title: "Edit {employee.full_name()}",
                                    onclick: move |_| on_edit.call(employee.id),
                                    Icon { icon: FaPen, width: 14, height: 14 }
                                }
                                button {
                                    class: "btn btn-outline btn-icon btn-danger-text",
                                    title: "Delete {employee.full_name()}",
                                    onclick: move |_| on_delete.call(employee.id),
                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, first: &str, last: &str, mail: &str) -> Employee {
        Employee {
            id,
            first_name: first.into(),
            last_name: last.into(),
            mail: mail.into(),
            password: None,
        }
    }

    #[derive(Clone)]
    struct RosterState {
        loading: bool,
        employees: Vec<Employee>,
    }

    fn roster_app(state: RosterState) -> Element {
        rsx! {
            EmployeeRoster {
                loading: state.loading,
                employees: state.employees,
                on_edit: move |_| {},
                on_delete: move |_| {},
            }
        }
    }

    fn render(loading: bool, employees: Vec<Employee>) -> String {
        let mut dom = VirtualDom::new_with_props(roster_app, RosterState { loading, employees });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn body_rows(html: &str) -> usize {
        // One header row plus one per employee
        html.matches("<tr").count() - 1
    }

    #[test]
    fn loading_shows_message_and_no_table() {
        let html = render(true, vec![employee(1, "Ada", "Lovelace", "ada@x.io")]);
        assert!(html.contains("Loading employees..."));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render(false, Vec::new());
        assert!(html.contains("No employees found. Add your first employee!"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("Loading employees..."));
    }

    #[test]
    fn single_employee_row_shows_fields_verbatim() {
        let html = render(false, vec![employee(1, "Ada", "Lovelace", "ada@x.io")]);

        assert_eq!(body_rows(&html), 1);
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>Ada</td>"));
        assert!(html.contains("<td>Lovelace</td>"));
        assert!(html.contains("<td>ada@x.io</td>"));
        assert!(html.contains("Edit Ada Lovelace"));
        assert!(html.contains("Delete Ada Lovelace"));
    }

    #[test]
    fn row_count_matches_list_length_in_order() {
        let html = render(
            false,
            vec![
                employee(3, "Grace", "Hopper", "grace@x.io"),
                employee(1, "Ada", "Lovelace", "ada@x.io"),
                employee(2, "Alan", "Turing", "alan@x.io"),
            ],
        );

        assert_eq!(body_rows(&html), 3);
        let grace = html.find("grace@x.io").unwrap();
        let ada = html.find("ada@x.io").unwrap();
        let alan = html.find("alan@x.io").unwrap();
        assert!(grace < ada && ada < alan);
    }
}
