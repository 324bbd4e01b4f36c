use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{empty_state::EmptyState, layout::Layout},
    pages::{AttendancePage, DashboardPage, EmployeesPage},
    state::cache::QueryCache,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/attendance"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context(QueryCache::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Layout>
            <EmptyState
                title="Page Not Found"
                description="The page you are looking for does not exist."
                icon="fa-compass"
            />
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::NAV_LINKS;
    use std::collections::HashSet;

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn every_nav_link_has_a_route() {
        for (href, label) in NAV_LINKS {
            assert!(
                ROUTE_PATHS.contains(href),
                "nav link {} points at unknown path {}",
                label,
                href
            );
        }
        assert_eq!(NAV_LINKS.len(), ROUTE_PATHS.len());
    }
}
