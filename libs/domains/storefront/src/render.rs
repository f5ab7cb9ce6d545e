//! HTML for the storefront page.
//!
//! Every view is wrapped in the same document shell and `<main>` element;
//! only the body of `<main>` depends on the [`PageView`].

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::Product;
use crate::view::PageView;

pub const PAGE_TITLE: &str = "Best Coffee";

const BANNER_IMAGE: &str = "/images/banner.jpg";
const LOGO_IMAGE: &str = "/logo.png";
const FEATURED_IMAGE: &str = "/images/coffee.jpg";

/// Full HTML document for `view`.
pub fn render_page(view: &PageView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                meta name="description" content="Freshly roasted coffee, delivered.";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (render_view(view))
            }
        }
    }
}

/// The `<main>` element for `view`.
pub fn render_view(view: &PageView) -> Markup {
    html! {
        main class="storefront" data-view=(view.name()) {
            @match view {
                PageView::Error(_) => (error_notice()),
                PageView::Loading => (spinner()),
                PageView::Empty => (empty_notice()),
                PageView::Ready { products, featured } => {
                    @if let Some(product) = products.get(*featured) {
                        (banner(product))
                    }
                    (product_grid(products))
                }
            }
        }
    }
}

fn error_notice() -> Markup {
    html! {
        div class="no-data" role="alert" { "An error has occurred" }
    }
}

fn spinner() -> Markup {
    html! {
        div class="spinner" role="status" aria-label="Loading" {}
    }
}

fn empty_notice() -> Markup {
    html! {
        div class="no-data" { "No Products" }
    }
}

fn banner(product: &Product) -> Markup {
    html! {
        section class="box" {
            div class="banner" {
                img class="banner-image" alt="banner" src=(BANNER_IMAGE);
            }
            div class="info" {
                div class="logo" {
                    img alt="logo" src=(LOGO_IMAGE);
                }
                h1 { (PAGE_TITLE) }
                (featured_panel(product))
            }
        }
    }
}

/// The promoted product: name, price, description (blank when absent) and
/// a link to its detail page.
fn featured_panel(product: &Product) -> Markup {
    html! {
        div class="banner-item" data-featured-id=(product.id) {
            div class="featured-info" {
                div class="featured-heading" {
                    span class="featured-name" { (product.name) }
                    span class="featured-price" { (product.price_display()) }
                }
                h3 class="featured-description" {
                    (product.description.as_deref().unwrap_or_default())
                }
                a class="featured-link" href=(product.detail_href()) { "See More" }
            }
            div class="featured-image" {
                img alt="item" src=(FEATURED_IMAGE) width="300" height="300";
            }
        }
    }
}

fn product_grid(products: &[Product]) -> Markup {
    html! {
        section class="box" {
            ul class="products" {
                @for product in products {
                    (product_card(product))
                }
            }
        }
    }
}

fn product_card(product: &Product) -> Markup {
    html! {
        li class="card" data-product-id=(product.id) {
            a href=(product.detail_href()) {
                span class="card-name" { (product.name) }
                span class="card-price" { (product.price_display()) }
            }
        }
    }
}

const PAGE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { background: #1b1410; color: #eee; font-family: system-ui, sans-serif; }
.storefront { min-height: 80vh; }
.box { position: relative; width: 100%; margin-bottom: 3rem; }
.banner { position: relative; min-height: 100vh; overflow: hidden; }
.banner-image { position: absolute; width: 100%; height: 100%; object-fit: cover; }
.banner::after {
    content: ""; position: absolute; inset: 0;
    background: radial-gradient(circle, rgba(0,0,0,.4) 0%, rgba(0,0,0,1) 100%);
}
.info {
    position: absolute; top: 0; width: 100%; height: 100%;
    display: flex; flex-direction: column; gap: .6rem;
    padding: 3rem; background-color: #00000090; z-index: 1;
}
.info > h1 { color: #efd2a8; font-size: 4rem; margin-bottom: 1rem; }
.logo { position: absolute; right: 5%; top: 1rem; width: 200px; height: 200px; opacity: .8; }
.logo img { width: 100%; height: 100%; object-fit: cover; }
.banner-item { display: flex; justify-content: space-around; align-items: center; }
.banner-item img { border-radius: 1rem; object-fit: cover; }
.featured-info { display: flex; flex-direction: column; gap: 1rem; min-width: 350px; }
.featured-heading { display: flex; justify-content: space-around; gap: 2.6rem; margin-bottom: 2rem; }
.featured-heading span { font-size: 2.8rem; font-weight: 800; text-transform: capitalize; }
.featured-name { color: #ce7d4c; }
.featured-price { color: #4cce75; }
.featured-description { max-width: 500px; }
.featured-link {
    background-color: #574fac; border-radius: .3rem; color: #eee;
    font-weight: 600; padding: 1rem; text-align: center; text-decoration: none;
}
.products {
    list-style: none; display: flex; flex-wrap: wrap;
    justify-content: center; align-items: center; gap: 3rem;
}
.card a {
    display: flex; flex-direction: column; gap: .5rem; padding: 1.5rem;
    border-radius: .5rem; background: #2a201a; color: #eee; text-decoration: none;
}
.card-name { color: #ce7d4c; font-weight: 700; text-transform: capitalize; }
.card-price { color: #4cce75; }
.no-data { padding: 4rem; text-align: center; font-size: 2rem; }
.spinner {
    margin: 6rem auto; width: 4rem; height: 4rem; border-radius: 50%;
    border: .4rem solid #574fac; border-top-color: transparent;
    animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
@media screen and (max-width: 1000px) { .banner-item { flex-direction: column-reverse; } }
@media screen and (max-width: 900px) {
    .info > h1 { font-size: 3rem; }
    .logo { width: 140px; height: 140px; }
}
@media screen and (max-width: 600px) { .info > h1 { font-size: 2rem; } }
"#;
