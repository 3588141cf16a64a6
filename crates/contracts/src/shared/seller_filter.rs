use serde::{Deserialize, Serialize};

use crate::domain::a003_sellers::SellerRef;

/// Derived values of a multi-seller selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerAggregate {
    pub string_id: String,
    pub seller_filter: String,
    pub count_total_items: usize,
    pub seller_id: String,
}

/// Joins names and ids in selection order, each followed by a comma
/// (the trailing comma is part of the format expected upstream).
pub fn aggregate(selection: &[SellerRef], use_name_as_primary: bool) -> SellerAggregate {
    let mut seller_filter = String::new();
    let mut seller_id = String::new();

    for seller in selection {
        seller_filter.push_str(&seller.name);
        seller_filter.push(',');
        seller_id.push_str(&seller.id);
        seller_id.push(',');
    }

    let string_id = if use_name_as_primary {
        seller_filter.clone()
    } else {
        seller_id.clone()
    };

    SellerAggregate {
        string_id,
        seller_filter,
        count_total_items: selection.len(),
        seller_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sellers() -> Vec<SellerRef> {
        vec![
            SellerRef::new("1", "Seller 1"),
            SellerRef::new("2", "Seller 2"),
        ]
    }

    #[test]
    fn test_aggregate_by_name() {
        assert_eq!(
            aggregate(&sellers(), true),
            SellerAggregate {
                string_id: "Seller 1,Seller 2,".to_string(),
                seller_filter: "Seller 1,Seller 2,".to_string(),
                count_total_items: 2,
                seller_id: "1,2,".to_string(),
            }
        );
    }

    #[test]
    fn test_aggregate_by_id() {
        let result = aggregate(&sellers(), false);
        assert_eq!(result.string_id, "1,2,");
        assert_eq!(result.seller_filter, "Seller 1,Seller 2,");
        assert_eq!(result.count_total_items, 2);
    }

    #[test]
    fn test_aggregate_empty_selection() {
        assert_eq!(aggregate(&[], true), SellerAggregate::default());
    }

    #[test]
    fn test_aggregate_keeps_selection_order() {
        let mut selection = sellers();
        selection.reverse();
        let result = aggregate(&selection, true);
        assert_eq!(result.seller_filter, "Seller 2,Seller 1,");
        assert_eq!(result.seller_id, "2,1,");
    }
}
