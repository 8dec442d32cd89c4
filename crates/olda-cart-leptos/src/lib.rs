//! Leptos integration for the Olda cart.
//!
//! Wrap the storefront in [`CartProvider`] and reach the cart from any
//! component below it with [`use_cart`]:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use olda_cart_leptos::prelude::*;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     view! {
//!         <CartProvider>
//!             <CartBadge/>
//!         </CartProvider>
//!     }
//! }
//!
//! #[component]
//! fn CartBadge() -> impl IntoView {
//!     let cart = use_cart();
//!     view! { <span>{move || format!("{:.2} €", cart.total())}</span> }
//! }
//! ```

mod context;

pub use context::{default_sink, provide_cart, try_use_cart, use_cart, CartContext, CartProvider};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::context::{
        provide_cart, try_use_cart, use_cart, CartContext, CartProvider,
    };
    pub use olda_cart::prelude::*;
}
