//! # Utility Recipe Demo
//!
//! Walks each utility once with structured logging, including the two
//! deliberate failure cases (a negative delayed square and a non-scalar JSON
//! value), which are reported and recovered from rather than aborting.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run   # per-call debug events from the modules
//! ```

use serde_json::json;
use tracing::{error, info, warn, Instrument};
use utility_recipe::model::{Car, Day, Describe, Product, RatedItem};
use utility_recipe::runtime::setup_tracing;
use utility_recipe::{casing, concatenate, days, delayed, pricing, ratings, values};
use utility_recipe::{Case, ScalarValue};

#[tokio::main]
async fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting utility recipe walkthrough");

    info!(
        upper = %casing::format_default("abc"),
        lower = %casing::format("ABC", Case::Lower),
        "Text casing"
    );

    let books = vec![
        RatedItem::new("Good Book", 4.5),
        RatedItem::new("Average Book", 3.0),
        RatedItem::new("Great Book", 5.0),
    ];
    let highly_rated = ratings::filter_by_rating(&books);
    info!(kept = highly_rated.len(), "Rating filter");

    let merged = concatenate![vec![1, 2], vec![3], vec![4, 5]];
    info!(?merged, "Sequence concatenation");

    let car = Car::new("Toyota", 2020, "Corolla");
    info!(info = %car.info(), model = %car.model_info(), "Vehicle hierarchy");

    info!(
        text = values::process_value(&ScalarValue::from("hello")),
        numeric = values::process_value(&ScalarValue::from(10.0)),
        "Scalar transform"
    );
    // The boundary rejects anything that is neither text nor numeric.
    if let Err(e) = ScalarValue::try_from(json!(true)) {
        warn!(error = %e, "Boundary rejected a non-scalar value");
    }

    let products = vec![
        Product::new("Laptop", 999.0),
        Product::new("Phone", 699.0),
        Product::new("Tablet", 499.0),
    ];
    match pricing::most_expensive(&products) {
        Some(winner) => info!(name = %winner.name, price = winner.price, "Most expensive product"),
        None => info!("No products to compare"),
    }

    for day in [Day::Monday, Day::Saturday] {
        info!(%day, class = %days::day_type(day), "Day classification");
    }

    let span = tracing::info_span!("delayed_square");
    async {
        info!("Scheduling square of 5");
        match delayed::square_after_delay(5.0).await {
            Ok(result) => info!(result, "Delayed square resolved"),
            Err(e) => error!(error = %e, "Delayed square failed"),
        }

        // Negative input is rejected synchronously, without the delay.
        if let Err(e) = delayed::square_after_delay(-1.0).await {
            warn!(error = %e, "Rejected as expected");
        }
    }
    .instrument(span)
    .await;

    info!("Walkthrough completed successfully");
}
