use maud::{DOCTYPE, Markup, html};
use maudit::maud::generator;
use maudit::route::{PageContext, RouteExt};

use crate::config::{CONTACT_EMAIL, SITE_DESCRIPTION, SITE_NAME};
use crate::routes::{LocationPage, LocationParams};
use stays::catalog;
use stays::filter::location_slug;

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
    /// Absolute or site-relative path of the image used in link previews.
    pub image: Option<String>,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: Some(SITE_DESCRIPTION.to_string()),
            canonical_url: None,
            image: None,
        }
    }
}

impl SeoMeta {
    pub fn render(&self, base_url: &Option<String>) -> Markup {
        let base_url = base_url.as_deref().unwrap_or_default();

        let formatted_title = if self.title == SITE_NAME {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, SITE_NAME)
        };

        let description = self
            .description
            .clone()
            .unwrap_or_else(|| SITE_DESCRIPTION.to_string());

        let social_image_url = match &self.image {
            Some(image) if image.starts_with('/') => format!("{}{}", base_url, image),
            Some(image) => image.clone(),
            None => format!("{}/social-image.png", base_url),
        };

        html! {
            title { (formatted_title) }
            meta name="description" content=(description);

            // Open Graph meta tags
            meta property="og:title" content=(formatted_title);
            meta property="og:description" content=(description);
            meta property="og:type" content="website";
            meta property="og:image" content=(social_image_url);
            @if let Some(canonical_url) = &self.canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }

            meta name="twitter:card" content="summary_large_image";
            meta name="twitter:title" content=(formatted_title);
            meta name="twitter:description" content=(description);
            meta name="twitter:image" content=(social_image_url);
        }
    }
}

fn header() -> Markup {
    html! {
        header.site-header {
            div.container {
                a.brand href="/" { (SITE_NAME) }
                nav {
                    @for location in catalog::locations() {
                        a href=(LocationPage.url(LocationParams { location: location_slug(location) })) {
                            (location)
                        }
                    }
                }
            }
        }
    }
}

pub fn layout(
    main: Markup,
    ctx: &mut PageContext,
    seo: Option<SeoMeta>,
) -> Result<Markup, Box<dyn std::error::Error>> {
    ctx.assets.include_style("assets/site.css")?;

    let seo_data = seo.unwrap_or_default();

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                link rel="icon" href="/favicon.svg";
                (seo_data.render(ctx.base_url))
            }
            body {
                (header())
                main { (main) }
                footer.site-footer {
                    div.container {
                        p { "© 2025 " (SITE_NAME) ". Bookings are handled by the platforms linked on each property." }
                        a href=(format!("mailto:{}", CONTACT_EMAIL)) { (CONTACT_EMAIL) }
                    }
                }
            }
        }
    })
}
