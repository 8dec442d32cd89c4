//! Cart store behaviour against an in-memory sink.

use std::sync::Arc;

use olda_cart::prelude::*;
use olda_cart::{decode_items, DEFAULT_STORAGE_KEY};

fn logo(len: usize) -> String {
    format!("data:image/png;base64,{}", "A".repeat(len))
}

fn item(id: &str, total: f64) -> CartItem {
    CartItem::new(id, total).with_field("produit", "T-shirt")
}

fn sum(items: &[CartItem]) -> f64 {
    items.iter().map(|i| i.prix.total).sum()
}

#[test]
fn checkout_scenario() {
    let sink = Arc::new(MemorySink::new());
    let mut cart = CartStore::open(sink);
    assert!(cart.is_empty());

    cart.add(item("a", 10.0));
    cart.add(item("b", 5.0));
    assert_eq!(cart.total(), 15.0);

    cart.update("a", item("a", 20.0));
    assert_eq!(cart.total(), 25.0);

    cart.remove("b");
    assert_eq!(cart.items(), &[item("a", 20.0)]);
    assert_eq!(cart.total(), 20.0);

    cart.clear();
    assert!(cart.items().is_empty());
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn total_tracks_every_mutation() {
    let sink = Arc::new(MemorySink::new());
    let mut cart = CartStore::open(sink);

    cart.add(item("a", 1.25));
    assert_eq!(cart.total(), sum(cart.items()));
    cart.add(item("b", 2.5));
    assert_eq!(cart.total(), sum(cart.items()));
    cart.add(item("a", 4.0));
    assert_eq!(cart.total(), sum(cart.items()));
    cart.update("a", item("c", 0.5));
    assert_eq!(cart.total(), sum(cart.items()));
    cart.remove("missing");
    assert_eq!(cart.total(), sum(cart.items()));
    cart.remove("c");
    assert_eq!(cart.total(), 2.5);
    cart.clear();
    assert_eq!(cart.total(), sum(cart.items()));
}

#[test]
fn add_then_remove_restores_previous_items() {
    let sink = Arc::new(MemorySink::new());
    let mut cart = CartStore::open(sink);
    cart.add(item("a", 1.0));
    cart.add(item("b", 2.0));
    let before = cart.items().to_vec();

    cart.add(item("new", 9.0));
    cart.remove("new");
    assert_eq!(cart.items(), before.as_slice());
}

#[test]
fn update_keeps_length_and_position() {
    let sink = Arc::new(MemorySink::new());
    let mut cart = CartStore::open(sink);
    cart.add(item("a", 1.0));
    cart.add(item("b", 2.0));
    cart.add(item("c", 3.0));

    cart.update("b", item("b", 7.0).with_field("taille", "XL"));
    assert_eq!(cart.len(), 3);
    let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(cart.items()[1].total(), 7.0);

    let before = cart.items().to_vec();
    cart.update("zzz", item("zzz", 100.0));
    assert_eq!(cart.items(), before.as_slice());
}

#[test]
fn reload_returns_last_written_cart() {
    let sink = Arc::new(MemorySink::new());
    let mut cart = CartStore::open(sink.clone());
    cart.add(item("a", 10.0).with_logo_avant(logo(16)));
    cart.add(item("b", 5.0).with_logo_arriere(logo(16)));
    assert_eq!(cart.durability(), Durability::Full);

    let reloaded = CartStore::open(sink);
    assert_eq!(reloaded.items(), cart.items());
    assert_eq!(reloaded.total(), 15.0);
}

#[test]
fn oversized_cart_is_saved_without_logos() {
    let sink = Arc::new(MemorySink::with_quota(400));
    let mut cart = CartStore::open(sink.clone());

    let heavy = item("a", 10.0)
        .with_logo_avant(logo(2_000))
        .with_logo_arriere(logo(2_000));
    cart.add(heavy.clone());

    assert_eq!(cart.durability(), Durability::Stripped);
    // memory still holds the images
    assert_eq!(cart.items(), &[heavy.clone()]);

    let reloaded = CartStore::open(sink.clone());
    assert_eq!(reloaded.items(), &[heavy.stripped()]);
    assert_eq!(reloaded.items()[0].extra["produit"], "T-shirt");

    let raw = sink.peek(DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(decode_items(&raw).unwrap(), vec![heavy.stripped()]);
}

#[test]
fn full_storage_keeps_cart_in_memory() {
    let sink = Arc::new(MemorySink::new());
    let mut cart = CartStore::open(sink.clone());
    cart.add(item("a", 10.0));

    sink.set_quota(Some(8));
    cart.add(item("b", 5.0).with_logo_avant(logo(64)));

    assert_eq!(cart.durability(), Durability::Volatile);
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), 15.0);

    // the sink still has the last cart that fit
    let raw = sink.peek(DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(decode_items(&raw).unwrap(), vec![item("a", 10.0)]);
}

#[test]
fn opaque_fields_survive_storage() {
    let sink = Arc::new(MemorySink::new());
    sink.seed(
        DEFAULT_STORAGE_KEY,
        r##"[{"id":"sweat-3","produit":"Sweat","couleur":{"nom":"Sable","hex":"#d8c3a5"},
            "prix":{"total":54.9,"unitaire":54.9,"options":[2.5]},
            "logoAvant":{"url":null,"position":"coeur"}}]"##,
    );

    let mut cart = CartStore::open(sink.clone());
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total(), 54.9);

    cart.add(item("b", 1.0));
    let reloaded = CartStore::open(sink);
    let first = &reloaded.items()[0];
    assert_eq!(first.extra["couleur"]["nom"], "Sable");
    assert_eq!(first.prix.extra["options"][0], 2.5);
    assert_eq!(first.logo_avant.extra["position"], "coeur");
}

#[test]
fn non_finite_total_is_not_persisted() {
    let sink = Arc::new(MemorySink::new());
    let mut cart = CartStore::open(sink.clone());
    cart.add(item("a", 10.0));

    cart.add(item("b", f64::INFINITY));
    assert_eq!(cart.durability(), Durability::Volatile);
    assert_eq!(cart.len(), 2);

    // the last representable cart is still stored and reloads intact
    let reloaded = CartStore::open(sink.clone());
    assert_eq!(reloaded.items(), &[item("a", 10.0)]);
    assert_eq!(reloaded.durability(), Durability::Full);

    cart.update("b", item("b", 5.0));
    assert_eq!(cart.durability(), Durability::Full);
    assert_eq!(CartStore::open(sink).total(), 15.0);
}

#[test]
fn null_logos_in_storage_are_tolerated() {
    let sink = Arc::new(MemorySink::new());
    sink.seed(
        DEFAULT_STORAGE_KEY,
        r#"[{"id":"a","prix":{"total":3},"logoAvant":null,"logoArriere":null},
            {"id":"b","prix":{"total":4}}]"#,
    );

    let cart = CartStore::open(sink.clone());
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), 7.0);
    assert_eq!(cart.items()[0].logo_avant, Logo::default());

    let raw = sink.peek(DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(decode_items(&raw).unwrap().len(), 2);
}
