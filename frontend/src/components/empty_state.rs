use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    let icon_class = format!("fas {} text-3xl text-fg-muted", icon.unwrap_or("fa-folder-open"));
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <div class="mx-auto h-12 w-12 flex items-center justify-center" aria-hidden="true">
                <i class=icon_class></i>
            </div>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_description_and_icon() {
        let html = render_to_string(move || {
            view! {
                <EmptyState
                    title="No Employees Found"
                    description="Click \u{201c}Add Employee\u{201d} to create your first employee."
                    icon="fa-users"
                />
            }
        });
        assert!(html.contains("No Employees Found"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("fa-users"));
    }
}
