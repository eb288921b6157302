//! Landing page handler

use maud::Markup;

use crate::pages;

/// Marketing landing page
pub async fn landing_page() -> Markup {
    pages::landing_page()
}
