use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Employees() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::EmployeeListView {
            on_create: move |_: ()| {
                nav.push(Route::CreateEmployee {});
            },
            on_edit: move |id: i64| {
                nav.push(Route::EditEmployee { id });
            },
            on_logout: move |_: ()| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn CreateEmployee() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::CreateEmployeeView {
            on_navigate_list: move |_: ()| {
                nav.push(Route::Employees {});
            },
        }
    }
}

#[component]
pub fn EditEmployee(id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::EditEmployeeView {
            id: id,
            on_navigate_list: move |_: ()| {
                nav.push(Route::Employees {});
            },
        }
    }
}
