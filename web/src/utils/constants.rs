//! Application constants

pub const BRAND_NAME: &str = "CineX";
pub const TAGLINE: &str = "Crowdfunding for Creatives";

/// Featured campaigns shown on the home page
pub const FEATURED_COUNT: usize = 3;

/// Id of the static loading overlay in `index.html`
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("/about", "About"),
    ("/contact", "Contact / Support"),
    ("/terms", "Terms of Service"),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("https://twitter.com", "Twitter"),
    ("https://facebook.com", "Facebook"),
    ("https://instagram.com", "Instagram"),
];
