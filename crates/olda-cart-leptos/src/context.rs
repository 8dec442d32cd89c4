//! Cart context: provider component and consumer hooks.

use std::sync::Arc;

use leptos::prelude::*;
use olda_cart::{CartConfig, CartError, CartItem, CartStore, DurableSink, Durability};

/// Handle to the cart shared through the reactive context.
///
/// Reads subscribe the calling reactive scope; mutations persist the cart
/// before returning.
#[derive(Clone, Copy)]
pub struct CartContext {
    store: RwSignal<CartStore>,
}

impl CartContext {
    /// Load a cart from `sink` without registering it as context.
    pub fn new(sink: Arc<dyn DurableSink>, config: CartConfig) -> Self {
        Self {
            store: RwSignal::new(CartStore::load(sink, config)),
        }
    }

    /// Current items in display order.
    pub fn items(&self) -> Vec<CartItem> {
        self.store.with(|cart| cart.items().to_vec())
    }

    /// Sum of the line totals.
    pub fn total(&self) -> f64 {
        self.store.with(|cart| cart.total())
    }

    /// Number of lines.
    pub fn item_count(&self) -> usize {
        self.store.with(|cart| cart.len())
    }

    /// Outcome of the most recent write.
    pub fn durability(&self) -> Durability {
        self.store.with(|cart| cart.durability())
    }

    pub fn add_item(&self, item: CartItem) {
        self.store.update(|cart| cart.add(item));
    }

    pub fn remove_item(&self, id: &str) {
        self.store.update(|cart| cart.remove(id));
    }

    pub fn update_item(&self, id: &str, updated: CartItem) {
        self.store.update(|cart| cart.update(id, updated));
    }

    pub fn clear_cart(&self) {
        self.store.update(|cart| cart.clear());
    }
}

/// Sink used by [`CartProvider`]: browser local storage on wasm with the
/// `web` feature, memory otherwise.
pub fn default_sink() -> Arc<dyn DurableSink> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(olda_cart::LocalStorageSink)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(olda_cart::MemorySink::new())
    }
}

/// Load the cart and provide it to the current reactive owner.
pub fn provide_cart(sink: Arc<dyn DurableSink>, config: CartConfig) -> CartContext {
    let cart = CartContext::new(sink, config);
    tracing::debug!(items = cart.store.with_untracked(|c| c.len()), "cart provided");
    provide_context(cart);
    cart
}

/// Get the cart, or [`CartError::MissingProvider`] outside a provider.
pub fn try_use_cart() -> Result<CartContext, CartError> {
    use_context::<CartContext>().ok_or(CartError::MissingProvider)
}

/// Get the cart.
///
/// # Panics
///
/// Panics when called outside a [`CartProvider`]; that is a wiring bug, not
/// a runtime condition.
pub fn use_cart() -> CartContext {
    match try_use_cart() {
        Ok(cart) => cart,
        Err(e) => panic!("{}", e),
    }
}

/// Provides the cart to its children.
#[component]
pub fn CartProvider(
    /// Storage key and fallback settings; defaults when omitted.
    #[prop(optional)]
    config: Option<CartConfig>,
    children: Children,
) -> impl IntoView {
    provide_cart(default_sink(), config.unwrap_or_default());
    children()
}
