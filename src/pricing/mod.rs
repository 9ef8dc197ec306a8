//! Maximum-price reduction over [`Product`] collections.

use crate::model::Product;
use tracing::debug;

/// Returns the product with the strictly greatest price, or `None` for an
/// empty slice.
///
/// Ties are broken by the left-to-right scan: the running maximum is only
/// replaced on a strict `>` comparison, so the FIRST of several equally
/// priced maxima wins. (`Iterator::max_by` keeps the last and would change
/// the observable result, hence the explicit fold.)
///
/// Pure: borrows the slice, never mutates or clones it.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    let winner = products.iter().fold(None, |best: Option<&Product>, candidate| {
        match best {
            Some(current) if candidate.price > current.price => Some(candidate),
            Some(current) => Some(current),
            None => Some(candidate),
        }
    });
    debug!(
        candidates = products.len(),
        winner = winner.map(|p| p.name.as_str()),
        "most_expensive"
    );
    winner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_absent_not_an_error() {
        assert!(most_expensive(&[]).is_none());
    }

    #[test]
    fn finds_the_strict_maximum() {
        let products = vec![
            Product::new("Laptop", 999.0),
            Product::new("Phone", 699.0),
            Product::new("Tablet", 499.0),
        ];
        let winner = most_expensive(&products).unwrap();
        assert_eq!(winner.name, "Laptop");
    }

    #[test]
    fn first_of_tied_maxima_wins() {
        let products = vec![
            Product::new("A", 10.0),
            Product::new("B", 10.0),
            Product::new("C", 5.0),
        ];
        let winner = most_expensive(&products).unwrap();
        assert_eq!(winner.name, "A");
    }

    #[test]
    fn singleton_returns_that_element() {
        let products = vec![Product::new("Only", 1.0)];
        assert_eq!(most_expensive(&products).unwrap().name, "Only");
    }

    #[test]
    fn later_strictly_greater_price_still_wins() {
        let products = vec![
            Product::new("Cheap", 1.0),
            Product::new("Pricey", 2.0),
        ];
        assert_eq!(most_expensive(&products).unwrap().name, "Pricey");
    }
}
