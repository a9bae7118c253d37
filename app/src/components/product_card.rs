//! Product tile for the feed grid.

use leptos::prelude::*;
use quicksell_core::Listing;

#[component]
pub fn ProductCard(listing: Listing) -> impl IntoView {
    let price = listing.price_display();
    let seller = listing.seller_name().to_string();
    let condition = listing.product.condition.label();
    let title = listing.product.title.clone();
    let description = listing.product.description.clone();
    let category = listing.product.category.clone();
    let image_url = listing.product.image_url.clone();
    let is_sold = listing.product.is_sold;

    view! {
        <div class="product-card" class:product-card-sold=is_sold>
            <div class="product-image">
                {match image_url {
                    Some(url) => view! { <img src=url alt=title.clone()/> }.into_any(),
                    None => view! {
                        <div class="product-image-placeholder">
                            <span>"📦"</span>
                            <p>"No image"</p>
                        </div>
                    }.into_any(),
                }}
                <Show when=move || is_sold>
                    <div class="sold-overlay">
                        <span class="badge badge-sold">"SOLD"</span>
                    </div>
                </Show>
            </div>
            <div class="product-info">
                <div class="product-title-row">
                    <h3>{title.clone()}</h3>
                    <span class="badge badge-condition">{condition}</span>
                </div>
                {description.map(|d| view! { <p class="product-description">{d}</p> })}
                <div class="product-price-row">
                    <span class="product-price">{price}</span>
                    <span class="product-seller">"by " {seller}</span>
                </div>
                {category.map(|c| view! { <span class="badge badge-category">{c}</span> })}
            </div>
        </div>
    }
}
