mod add_listing_modal;
mod product_card;
mod spinner;
mod toast;

pub use add_listing_modal::AddListingModal;
pub use product_card::ProductCard;
pub use spinner::LoadingSpinner;
pub use toast::{show_toast, Toast, ToastHost, ToastKind};
