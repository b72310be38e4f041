mod common;

use async_trait::async_trait;
use checkout_flow::application::checkout::{CheckoutFlow, FlowState, ORDER_PLACED_TITLE};
use checkout_flow::domain::cart::{Cart, CartItem, Money};
use checkout_flow::domain::coordinate::Coordinate;
use checkout_flow::domain::order::{OrderReceipt, OrderSubmission};
use checkout_flow::domain::ports::{Notification, OrderService};
use checkout_flow::error::Result;
use checkout_flow::infrastructure::in_memory::{InMemoryOrderService, RecordingNotifier};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tokio::sync::Notify;

#[tokio::test]
async fn test_single_item_checkout_scenario() {
    let service = InMemoryOrderService::new();
    let notifier = RecordingNotifier::new();
    let cart = Cart::new(vec![CartItem::new("A", 2, dec!(10.00)).unwrap()]);
    let flow = CheckoutFlow::new(cart, Box::new(service.clone()), Box::new(notifier.clone()));

    flow.handle_map_click(-12.05, -77.03);
    let receipt = flow.submit_form(&common::valid_form()).await.unwrap();
    assert_eq!(receipt.id.as_deref(), Some("order-1"));

    let submissions = service.submissions().await;
    assert_eq!(submissions.len(), 1);
    let order = &submissions[0];
    assert_eq!(order.total, Money::new(dec!(20.00)));
    assert_eq!(order.coordinates, Coordinate::new(-12.05, -77.03));
    assert_eq!(order.contact, common::contact());
    assert_eq!(order.items, flow.cart().items());

    assert_eq!(
        notifier.notifications(),
        vec![Notification::success(ORDER_PLACED_TITLE)]
    );
}

#[test]
fn test_total_matches_sum_of_lines_for_random_carts() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let cart = common::random_cart(&mut rng);
        let expected: Decimal = cart
            .items()
            .iter()
            .map(|item| Decimal::from(item.quantity()) * item.unit_price().value())
            .sum();

        assert_eq!(cart.total().value(), expected);
        let shown = cart.total().to_fixed();
        assert_eq!(shown.parse::<Decimal>().unwrap(), expected);
        assert_eq!(shown.split('.').nth(1).map(str::len), Some(2));
    }
}

/// Holds every order until released, so a test can observe the in-flight state.
struct GatedOrderService {
    gate: Arc<Notify>,
}

#[async_trait]
impl OrderService for GatedOrderService {
    async fn submit_order(&self, _order: &OrderSubmission) -> Result<OrderReceipt> {
        self.gate.notified().await;
        Ok(OrderReceipt::default())
    }
}

#[tokio::test]
async fn test_map_stays_interactive_while_submitting() {
    let gate = Arc::new(Notify::new());
    let cart = Cart::new(vec![CartItem::new("A", 1, dec!(3.00)).unwrap()]);
    let flow = Arc::new(CheckoutFlow::new(
        cart,
        Box::new(GatedOrderService {
            gate: Arc::clone(&gate),
        }),
        Box::new(RecordingNotifier::new()),
    ));

    let submitting = Arc::clone(&flow);
    let handle = tokio::spawn(async move { submitting.handle_submit(common::contact()).await });

    while flow.state() != FlowState::Submitting {
        tokio::task::yield_now().await;
    }

    flow.handle_map_click(10.0, 20.0);
    assert_eq!(flow.coordinate(), Coordinate::new(10.0, 20.0));

    gate.notify_one();
    handle.await.unwrap().unwrap();
    assert_eq!(flow.state(), FlowState::Idle);
}

#[tokio::test]
async fn test_concurrent_submits_are_not_deduplicated() {
    let service = InMemoryOrderService::new();
    let notifier = RecordingNotifier::new();
    let cart = Cart::new(vec![CartItem::new("A", 1, dec!(3.00)).unwrap()]);
    let flow = CheckoutFlow::new(cart, Box::new(service.clone()), Box::new(notifier.clone()));

    let (first, second) = tokio::join!(
        flow.handle_submit(common::contact()),
        flow.handle_submit(common::contact())
    );
    assert!(first.is_ok());
    assert!(second.is_ok());

    assert_eq!(service.submissions().await.len(), 2);
    assert_eq!(notifier.notifications().len(), 2);
}
