use maudit::{AssetsOptions, BuildOptions};

pub const SITE_NAME: &str = "VanCityShortStays";
pub const SITE_DESCRIPTION: &str =
    "Short-term rentals in Yaletown and Downtown Vancouver, bookable directly with the host.";
pub const BASE_URL: &str = "https://vancityshortstays.com";
pub const CONTACT_EMAIL: &str = "stay@vancityshortstays.com";

pub fn build_options() -> BuildOptions {
    BuildOptions {
        base_url: Some(BASE_URL.to_string()),
        output_dir: "dist".into(),
        static_dir: "static".into(),
        assets: AssetsOptions {
            ..Default::default()
        },
        ..Default::default()
    }
}
