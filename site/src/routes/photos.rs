use maud::Markup;
use maudit::route::prelude::*;
use stays::catalog;

use crate::components::{photo_lightbox, photo_view};
use crate::layout::{SeoMeta, layout};

/// A lightbox page per photo, for visitors without JavaScript and for direct links.
#[route("/properties/[slug]/photos/[photo]/")]
pub struct PhotoPage;

#[derive(Params, Clone)]
pub struct PhotoParams {
    pub slug: String,
    /// 1-based, as shown to visitors.
    pub photo: usize,
}

impl Route<PhotoParams> for PhotoPage {
    fn pages(&self, _: &mut DynamicRouteContext) -> Pages<PhotoParams> {
        catalog::all()
            .iter()
            .flat_map(|listing| {
                (1..=listing.gallery().len()).map(|photo| {
                    Page::from_params(PhotoParams {
                        slug: listing.slug.to_string(),
                        photo,
                    })
                })
            })
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_photo(ctx)
    }
}

fn render_photo(ctx: &mut PageContext) -> Result<Markup, Box<dyn std::error::Error>> {
    let params = ctx.params::<PhotoParams>();
    let listing = catalog::get(&params.slug)?;
    let view = photo_view(listing, params.photo)?;

    ctx.assets.include_script("assets/photo-keys.ts")?;

    layout(
        photo_lightbox(listing, &view),
        ctx,
        Some(SeoMeta {
            title: view.alt.clone(),
            description: Some(listing.description.to_string()),
            canonical_url: None,
            image: Some(view.image.path().to_string()),
        }),
    )
}
