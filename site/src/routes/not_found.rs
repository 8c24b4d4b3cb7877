use maud::html;
use maudit::route::prelude::*;

use crate::layout::{SeoMeta, layout};

#[route("404.html")]
pub struct NotFound;

impl Route for NotFound {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        layout(
            html! {
                div.container.not-found {
                    h1 { "404 - Not Found" }
                    p { "This page checked out early. Our Vancouver homes are still here." }
                    a.btn.btn-primary href="/" { "Browse all stays" }
                }
            },
            ctx,
            Some(SeoMeta {
                title: "404 - Page Not Found".to_string(),
                description: Some("This page does not exist.".to_string()),
                ..Default::default()
            }),
        )
    }
}
