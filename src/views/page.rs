use leptos::ssr::render_to_string;
use leptos::*;

use crate::constants::{PAGE_TITLE, STYLESHEET_PATH};
use crate::models::player::PlayerId;
use crate::views::{
    detail_view::{DetailContainer, DetailSection},
    form_view::{FormContainer, NewPlayerFormSection},
    roster_view::{RosterContainer, RosterSection},
};

/// The whole document: three named containers the views render into, plus
/// an optional notice line for surfaced errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub notice: Option<String>,
    pub roster: RosterContainer,
    pub detail: DetailContainer,
    pub form: FormContainer,
    /// Player currently shown in the detail container.
    pub selected: Option<PlayerId>,
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn to_html(&self) -> String {
        let page = self.clone();
        let body = render_to_string(move || view! { <PageView page=page/> });
        format!("<!DOCTYPE html>{body}")
    }
}

#[component]
fn PageView(page: Page) -> impl IntoView {
    let notice = page
        .notice
        .map(|notice| view! { <p class="notice" role="alert">{notice}</p> });
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <title>{PAGE_TITLE}</title>
                <link rel="stylesheet" href=STYLESHEET_PATH/>
            </head>
            <body>
                <h1>{PAGE_TITLE}</h1>
                {notice}
                <NewPlayerFormSection form=page.form/>
                <DetailSection container=page.detail/>
                <RosterSection container=page.roster/>
            </body>
        </html>
    }
}
