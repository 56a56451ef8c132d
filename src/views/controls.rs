use leptos::*;

use crate::models::actions::Action;

/// A one-button form that sends `action` back to the server.
#[component]
pub fn Control(label: &'static str, action: Action) -> impl IntoView {
    view! {
        <form class="control" method=action.method().as_str().to_lowercase() action=action.path()>
            <button type="submit">{label}</button>
        </form>
    }
}
