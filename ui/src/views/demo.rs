//! Sample data for the gallery pages.

use crate::blocks::{Feature, PricingTier, Product, Testimonial};
use crate::core::{
    chart::SeriesPoint,
    icon::IconKind,
    money::{Adjustments, LineItem},
};

pub(crate) fn cart_items() -> Vec<LineItem> {
    vec![
        LineItem {
            name: "Canvas tote".into(),
            unit_price: 19.99,
            quantity: 2,
        },
        LineItem {
            name: "Sticker pack".into(),
            unit_price: 9.99,
            quantity: 1,
        },
    ]
}

pub(crate) fn cart_adjustments() -> Adjustments {
    Adjustments {
        shipping: 4.95,
        tax: 0.0,
        discount: 5.0,
    }
}

pub(crate) fn pricing_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            name: "Starter".into(),
            monthly_price: 0.0,
            original_price: None,
            features: vec!["1 site".into(), "Community support".into()],
            highlighted: false,
        },
        PricingTier {
            name: "Pro".into(),
            monthly_price: 9.0,
            original_price: Some(12.0),
            features: vec![
                "10 sites".into(),
                "Custom domains".into(),
                "Priority support".into(),
            ],
            highlighted: true,
        },
        PricingTier {
            name: "Studio".into(),
            monthly_price: 49.0,
            original_price: None,
            features: vec!["Unlimited sites".into(), "Team seats".into()],
            highlighted: false,
        },
    ]
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product {
            name: "Merino crew".into(),
            image_url: "https://picsum.photos/seed/merino/480/360".into(),
            price: 79.0,
            original_price: Some(129.0),
            rating: 4.6,
            review_count: 212,
        },
        Product {
            name: "Field notebook".into(),
            image_url: "https://picsum.photos/seed/notebook/480/360".into(),
            price: 18.0,
            original_price: None,
            rating: 3.8,
            review_count: 41,
        },
    ]
}

pub(crate) fn revenue() -> Vec<SeriesPoint> {
    [
        ("Jan", 4200.0),
        ("Feb", 3900.0),
        ("Mar", 5100.0),
        ("Apr", 4800.0),
        ("May", 6300.0),
        ("Jun", 7100.0),
    ]
    .into_iter()
    .map(|(label, value)| SeriesPoint::new(label, value))
    .collect()
}

pub(crate) fn forecast() -> Vec<SeriesPoint> {
    [
        ("Jan", 4000.0),
        ("Feb", 4300.0),
        ("Mar", 4700.0),
        ("Apr", 5100.0),
        ("May", 5600.0),
        ("Jun", 6200.0),
        ("Jul", 6900.0),
        ("Aug", 7500.0),
    ]
    .into_iter()
    .map(|(label, value)| SeriesPoint::new(label, value))
    .collect()
}

/// Seven weeks of daily counts, one row per weekday.
pub(crate) fn activity() -> Vec<f64> {
    (0..49u32)
        .map(|day| f64::from((day * 7 + day / 3) % 11))
        .collect()
}

pub(crate) fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "We shipped the new storefront in a weekend.".into(),
            author: "Priya N.".into(),
            role: "Founder, Loom & Line".into(),
        },
        Testimonial {
            quote: "The pricing block alone paid for itself.".into(),
            author: "Marco D.".into(),
            role: "Growth lead, Fieldday".into(),
        },
        Testimonial {
            quote: "Our portfolio finally looks like we meant it.".into(),
            author: "Sam K.".into(),
            role: "Designer".into(),
        },
    ]
}

pub(crate) fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: IconKind::Bolt,
            title: "Fast by default".into(),
            body: "Static markup, no client runtime beyond what a block needs.".into(),
        },
        Feature {
            icon: IconKind::Shield,
            title: "Validated inputs".into(),
            body: "Bad prices or empty series render a clear placeholder.".into(),
        },
        Feature {
            icon: IconKind::Truck,
            title: "Storefront ready".into(),
            body: "Carts, product cards and pricing tables out of the box.".into(),
        },
    ]
}
