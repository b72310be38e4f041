use super::view::CheckoutView;
use crate::domain::cart::{Cart, Money};
use crate::domain::contact::ContactInfo;
use crate::domain::coordinate::Coordinate;
use crate::domain::form::CheckoutForm;
use crate::domain::map::MapView;
use crate::domain::order::{OrderReceipt, OrderSubmission};
use crate::domain::ports::{Notification, NotifierBox, OrderServiceBox};
use crate::error::{CheckoutError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

pub const ORDER_PLACED_TITLE: &str = "Order placed";
pub const ORDER_FAILED_TITLE: &str = "Order could not be placed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Submitting,
}

/// Decrements the in-flight counter when a submit finishes or is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// The checkout screen.
///
/// `CheckoutFlow` combines the injected cart, the delivery point picked on the map
/// and the validated contact form into one [`OrderSubmission`] and hands it to the
/// order service. All methods take `&self`, so the map stays usable while a submit
/// is awaiting the service. Nothing stops a second submit from starting meanwhile.
pub struct CheckoutFlow {
    cart: Cart,
    coordinate: Arc<watch::Sender<Coordinate>>,
    map: Mutex<MapView>,
    order_service: OrderServiceBox,
    notifier: NotifierBox,
    in_flight: AtomicUsize,
}

impl CheckoutFlow {
    /// Creates a new `CheckoutFlow` with the map centered on [`Coordinate::DEFAULT`].
    ///
    /// # Arguments
    ///
    /// * `cart` - The cart being checked out. Read-only from here on.
    /// * `order_service` - Where placed orders are persisted.
    /// * `notifier` - Shows success and failure popups.
    pub fn new(cart: Cart, order_service: OrderServiceBox, notifier: NotifierBox) -> Self {
        Self::with_map(cart, MapView::default(), order_service, notifier)
    }

    /// Same as [`CheckoutFlow::new`], using a caller-configured map. The marker's
    /// current position becomes the initial delivery point.
    pub fn with_map(
        cart: Cart,
        mut map: MapView,
        order_service: OrderServiceBox,
        notifier: NotifierBox,
    ) -> Self {
        let (sender, _) = watch::channel(map.marker());
        let coordinate = Arc::new(sender);

        let on_click = Arc::clone(&coordinate);
        map.on_click(move |point| {
            on_click.send_replace(point);
        });

        Self {
            cart,
            coordinate,
            map: Mutex::new(map),
            order_service,
            notifier,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart total, recomputed from the items on every call.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn coordinate(&self) -> Coordinate {
        *self.coordinate.borrow()
    }

    /// Observes delivery point changes, e.g. to redraw the marker.
    pub fn subscribe_coordinate(&self) -> watch::Receiver<Coordinate> {
        self.coordinate.subscribe()
    }

    pub fn state(&self) -> FlowState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            FlowState::Submitting
        } else {
            FlowState::Idle
        }
    }

    /// Runs `f` against a read-only view of the map.
    ///
    /// The map lock is held only for the duration of `f`; observe clicks through
    /// [`CheckoutFlow::subscribe_coordinate`] rather than map listeners.
    pub fn inspect_map<T>(&self, f: impl FnOnce(&MapView) -> T) -> T {
        let map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        f(&map)
    }

    pub fn marker(&self) -> Coordinate {
        self.inspect_map(MapView::marker)
    }

    pub fn zoom(&self) -> u8 {
        self.inspect_map(MapView::zoom)
    }

    pub fn view(&self) -> CheckoutView {
        CheckoutView::build(&self.cart, self.coordinate())
    }

    /// Replaces the delivery point with the clicked one. Any latitude/longitude is accepted.
    pub fn handle_map_click(&self, latitude: f64, longitude: f64) -> Coordinate {
        let point = self
            .map
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .click(latitude, longitude);
        debug!(latitude, longitude, "delivery point updated");
        point
    }

    /// Validates the form and submits the order when every field passes.
    ///
    /// Validation failures never reach the order service.
    pub async fn submit_form(&self, form: &CheckoutForm) -> Result<OrderReceipt> {
        let contact = form.validate().map_err(|errors| {
            debug!(%errors, "checkout form rejected");
            CheckoutError::Validation(errors)
        })?;
        self.handle_submit(contact).await
    }

    /// Composes the order from validated contact details and sends it.
    ///
    /// On success a single success notification is shown. On failure the error is
    /// logged, an error notification is shown, and the error is returned.
    #[instrument(skip(self, contact), fields(items = self.cart.len()))]
    pub async fn handle_submit(&self, contact: ContactInfo) -> Result<OrderReceipt> {
        if self.cart.is_empty() {
            warn!("submit attempted with an empty cart");
            return Err(CheckoutError::EmptyCart);
        }

        let order = OrderSubmission::compose(contact, self.coordinate(), &self.cart);
        debug!(?order, "order composed");

        let _in_flight = InFlight::enter(&self.in_flight);
        match self.order_service.submit_order(&order).await {
            Ok(receipt) => {
                info!(id = ?receipt.id, total = %order.total, "order placed");
                self.notifier.notify(Notification::success(ORDER_PLACED_TITLE));
                Ok(receipt)
            }
            Err(e) => {
                error!(error = %e, "order submission failed");
                self.notifier
                    .notify(Notification::error(ORDER_FAILED_TITLE, e.to_string()));
                Err(e)
            }
        }
    }
}
