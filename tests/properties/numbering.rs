//! Property tests for order numbering across failures and restarts.

use proptest::prelude::*;
use rust_decimal::Decimal;

use flooring::{OrderDraft, OrderNumber};

use crate::common::{date, TestEnv};

fn draft(valid: bool) -> OrderDraft {
    OrderDraft {
        delivery_date: date(11, 4, 2020),
        customer_name: "Customer".to_string(),
        state_code: "TX".to_string(),
        product_type: if valid { "Tile" } else { "Marble" }.to_string(),
        area: Decimal::new(150, 0),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Accepted orders are numbered 1, 2, 3, ... with rejected drafts
    /// leaving no gaps, and a restarted service continues after the last one.
    #[test]
    fn property_numbers_are_contiguous_and_survive_restart(
        attempts in proptest::collection::vec(any::<bool>(), 0..16),
        restart_at in any::<prop::sample::Index>(),
    ) {
        let env = TestEnv::new();
        let split = if attempts.is_empty() { 0 } else { restart_at.index(attempts.len() + 1) };
        let mut issued = Vec::new();

        for batch in [&attempts[..split], &attempts[split..]] {
            let service = env.service(date(6, 1, 2020));
            for valid in batch {
                match service.create_order(&draft(*valid)) {
                    Ok(order) => {
                        prop_assert!(*valid);
                        issued.push(order.order_number().get());
                    }
                    Err(_) => prop_assert!(!*valid),
                }
            }
        }

        let accepted = attempts.iter().filter(|v| **v).count() as u32;
        prop_assert_eq!(issued, (1..=accepted).collect::<Vec<_>>());
        prop_assert_eq!(
            env.service(date(6, 1, 2020)).next_order_number().unwrap(),
            OrderNumber::new(accepted + 1)
        );
    }
}
