use leptos::ssr::render_to_string;
use leptos::*;

use crate::constants::{BREED_INPUT_ID, IMAGE_URL_INPUT_ID, NAME_INPUT_ID, NEW_PLAYER_FORM_ID};
use crate::models::actions::Action;

// (input id, posted field name, label, input type)
const FIELDS: [(&str, &str, &str, &str); 3] = [
    (NAME_INPUT_ID, "name", "Name", "text"),
    (BREED_INPUT_ID, "breed", "Breed", "text"),
    (IMAGE_URL_INPUT_ID, "imageUrl", "Image URL", "url"),
];

/// State of `#new-player-form`. Unbound forms render without inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormContainer {
    bound: bool,
}

impl FormContainer {
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn action(&self) -> Option<Action> {
        self.bound.then_some(Action::AddPlayer)
    }

    pub fn input_names(&self) -> Vec<&'static str> {
        if self.bound {
            FIELDS.iter().map(|(_, name, _, _)| *name).collect()
        } else {
            Vec::new()
        }
    }

    pub fn to_html(&self) -> String {
        let form = self.clone();
        render_to_string(move || view! { <NewPlayerFormSection form=form/> }).to_string()
    }
}

/// Fills the new-player form with its inputs and binds it to submission.
pub fn bind(form: &mut FormContainer) {
    form.bound = true;
}

#[component]
pub fn NewPlayerFormSection(form: FormContainer) -> impl IntoView {
    let Some(action) = form.action() else {
        return view! { <form id=NEW_PLAYER_FORM_ID></form> };
    };
    let inputs = FIELDS
        .into_iter()
        .map(|(input_id, name, label, kind)| {
            view! {
                <label for=input_id>{label}</label>
                <input id=input_id name=name type=kind required=true/>
            }
        })
        .collect_view();
    view! {
        <form
            id=NEW_PLAYER_FORM_ID
            method=action.method().as_str().to_lowercase()
            action=action.path()
        >
            {inputs}
            <button type="submit">"Add player"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn binds_three_named_inputs() {
        let mut form = FormContainer::default();
        bind(&mut form);

        assert_eq!(form.action(), Some(Action::AddPlayer));
        assert_eq!(form.input_names(), vec!["name", "breed", "imageUrl"]);

        let html = form.to_html();
        assert!(html.contains("id=\"new-player-form\""));
        assert!(html.contains("method=\"post\""));
        assert!(html.contains("action=\"/players\""));
        assert!(html.contains("id=\"playerNameInput\""));
        assert!(html.contains("name=\"imageUrl\""));
        assert!(html.contains("Add player"));
    }

    #[test]
    fn binding_twice_does_not_duplicate_inputs() {
        let mut form = FormContainer::default();
        bind(&mut form);
        bind(&mut form);
        assert_eq!(form.input_names().len(), 3);
        assert_eq!(form.to_html().matches("<input").count(), 3);
    }

    #[test]
    fn unbound_form_has_no_inputs() {
        let form = FormContainer::default();
        assert!(!form.is_bound());
        assert!(!form.to_html().contains("<input"));
    }
}
