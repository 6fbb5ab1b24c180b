use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{
        guard::{RequireAdmin, RequireAuth},
        layout::Layout,
    },
    pages::{
        AdminAllowanceTypesPage, AdminAssignAllowancePage, AdminClockRequestsPage, AdminPage,
        EmployeeDetailPage, EmployeesPage, LoginPage,
    },
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/employees/:id",
    "/admin",
    "/admin/allowance-types",
    "/admin/assign-allowance",
    "/admin/clock-requests",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/",
    "/employees/:id",
    "/admin",
    "/admin/allowance-types",
    "/admin/assign-allowance",
    "/admin/clock-requests",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin",
    "/admin/allowance-types",
    "/admin/assign-allowance",
    "/admin/clock-requests",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="勤怠管理"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=ProtectedEmployees/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/employees/:id" view=ProtectedEmployeeDetail/>
                    <Route path="/admin" view=AdminOnlyHub/>
                    <Route path="/admin/allowance-types" view=AdminOnlyAllowanceTypes/>
                    <Route path="/admin/assign-allowance" view=AdminOnlyAssignAllowance/>
                    <Route path="/admin/clock-requests" view=AdminOnlyClockRequests/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <RequireAuth><Layout><EmployeesPage/></Layout></RequireAuth> }
}

#[component]
fn ProtectedEmployeeDetail() -> impl IntoView {
    view! { <RequireAuth><Layout><EmployeeDetailPage/></Layout></RequireAuth> }
}

#[component]
fn AdminOnlyHub() -> impl IntoView {
    view! { <RequireAdmin><Layout><AdminPage/></Layout></RequireAdmin> }
}

#[component]
fn AdminOnlyAllowanceTypes() -> impl IntoView {
    view! { <RequireAdmin><Layout><AdminAllowanceTypesPage/></Layout></RequireAdmin> }
}

#[component]
fn AdminOnlyAssignAllowance() -> impl IntoView {
    view! { <RequireAdmin><Layout><AdminAssignAllowancePage/></Layout></RequireAdmin> }
}

#[component]
fn AdminOnlyClockRequests() -> impl IntoView {
    view! { <RequireAdmin><Layout><AdminClockRequestsPage/></Layout></RequireAdmin> }
}
