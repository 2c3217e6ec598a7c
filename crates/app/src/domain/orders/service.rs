//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::{
            models::CartId,
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        orders::{
            errors::OrdersServiceError,
            models::{Order, OrderId},
            repository::PgOrdersRepository,
        },
        payments::{models::PaymentId, repository::PgPaymentsRepository},
        users::{models::UserId, repository::PgUsersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    payments_repository: PgPaymentsRepository,
    users_repository: PgUsersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            payments_repository: PgPaymentsRepository::new(),
            users_repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.place_order",
        skip(self),
        fields(user_id = %user, cart_id = %cart, payment_id = %payment),
        err
    )]
    async fn place_order(
        &self,
        user: UserId,
        cart: CartId,
        payment: PaymentId,
    ) -> Result<OrderId, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        // User first, then cart: the same lock order as every cart mutation.
        if !self.users_repository.lock_user(&mut tx, user).await? {
            return Err(OrdersServiceError::NotFound);
        }

        let record = self
            .carts_repository
            .lock_cart(&mut tx, cart)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        record
            .ensure_open_for(user)
            .map_err(OrdersServiceError::InvalidState)?;

        if self.items_repository.count_cart_items(&mut tx, cart).await? == 0 {
            return Err(OrdersServiceError::InvalidState("cart has no items"));
        }

        let settled_by = self.payments_repository.get_payment(&mut tx, payment).await?;

        if settled_by.user_id != user {
            return Err(OrdersServiceError::InvalidArgument(
                "payment belongs to another user",
            ));
        }

        let order = self
            .orders_repository
            .create_order(&mut tx, user, cart, payment)
            .await?;

        let rows_affected = self.carts_repository.mark_ordered(&mut tx, cart).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::InvalidState(
                "cart has already been ordered",
            ));
        }

        tx.commit().await?;

        info!(order_id = %order.id, "placed order");

        Ok(order.id)
    }

    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.orders_repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_orders(&mut tx, user).await?;

        tx.commit().await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Orders the user's open cart, settled by `payment`.
    ///
    /// The order row and the cart's transition to ordered are committed
    /// together. Placing the same cart again fails with `InvalidState`.
    async fn place_order(
        &self,
        user: UserId,
        cart: CartId,
        payment: PaymentId,
    ) -> Result<OrderId, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError>;

    /// Orders placed by the user, oldest first.
    async fn list_orders(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqlx::query_scalar;
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::{CartsService, CartsServiceError},
            products::models::Product,
            users::models::User,
        },
        test::TestContext,
    };

    use super::*;

    async fn running_shoe(ctx: &TestContext) -> Product {
        let category = ctx.create_category("Shoes", "Running").await;

        ctx.create_product(category.id, Decimal::new(8999, 2), 4).await
    }

    /// Fill an open cart with two items and record a payment for it.
    async fn checkout_ready(ctx: &TestContext, user: &User) -> TestResult<(CartId, PaymentId)> {
        let product = running_shoe(ctx).await;

        let item = ctx.carts.add_item(user.id, product.id).await?;
        ctx.carts.add_item(user.id, product.id).await?;

        let payment = ctx.record_payment(user.id, Decimal::new(17998, 2)).await;

        Ok((item.cart_id, payment))
    }

    async fn count_orders(ctx: &TestContext, cart: CartId) -> TestResult<i64> {
        let count = query_scalar("SELECT count(*) FROM orders WHERE cart_id = $1")
            .bind(cart.into_i64())
            .fetch_one(ctx.db.pool())
            .await?;

        Ok(count)
    }

    #[tokio::test]
    async fn place_order_marks_cart_ordered() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (cart, payment) = checkout_ready(&ctx, &user).await?;

        let order_id = ctx.orders.place_order(user.id, cart, payment).await?;

        let ordered = ctx.carts.get_cart(cart).await?;

        assert!(ordered.ordered);
        assert!(!ordered.is_open());
        assert!(ordered.ordered_on.is_some());
        assert_eq!(ordered.items.len(), 2);

        let order = ctx.orders.get_order(order_id).await?;

        assert_eq!(order.user_id, user.id);
        assert_eq!(order.cart_id, cart);
        assert_eq!(order.payment_id, payment);

        assert_eq!(ctx.carts.get_active_cart(user.id).await?, None);

        let previous = ctx.carts.get_previous_carts(user.id).await?;

        assert_eq!(previous.iter().map(|c| c.id).collect::<Vec<_>>(), vec![cart]);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_to_ordered_cart_returns_invalid_state() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (cart, payment) = checkout_ready(&ctx, &user).await?;
        let extra = ctx
            .create_product(ctx.create_category("Shoes", "Hiking").await.id, Decimal::ONE, 1)
            .await;

        ctx.orders.place_order(user.id, cart, payment).await?;

        let result = ctx.carts.add_item_to_cart(user.id, cart, extra.id).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidState(_))),
            "expected InvalidState, got {result:?}"
        );

        assert_eq!(ctx.carts.get_cart(cart).await?.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_after_order_opens_new_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (cart, payment) = checkout_ready(&ctx, &user).await?;
        let product = ctx
            .create_product(ctx.create_category("Shoes", "Hiking").await.id, Decimal::ONE, 1)
            .await;

        ctx.orders.place_order(user.id, cart, payment).await?;

        let item = ctx.carts.add_item(user.id, product.id).await?;

        assert_ne!(item.cart_id, cart);

        let active = ctx
            .carts
            .get_active_cart(user.id)
            .await?
            .ok_or("expected an active cart")?;

        assert_eq!(active.id, item.cart_id);
        assert_eq!(active.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn place_order_twice_creates_one_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (cart, payment) = checkout_ready(&ctx, &user).await?;

        ctx.orders.place_order(user.id, cart, payment).await?;

        let retry = ctx.orders.place_order(user.id, cart, payment).await;

        assert!(
            matches!(retry, Err(OrdersServiceError::InvalidState(_))),
            "expected InvalidState, got {retry:?}"
        );

        assert_eq!(count_orders(&ctx, cart).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn place_order_with_empty_cart_returns_invalid_state() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let payment = ctx.record_payment(user.id, Decimal::ONE).await;

        let cart: i64 = query_scalar("INSERT INTO carts (user_id) VALUES ($1) RETURNING id")
            .bind(user.id.into_i64())
            .fetch_one(ctx.db.pool())
            .await?;

        let result = ctx
            .orders
            .place_order(user.id, CartId::from_i64(cart), payment)
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidState("cart has no items"))),
            "expected InvalidState, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn place_order_with_foreign_payment_returns_invalid_argument() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let other = ctx.create_user("grace@example.com").await;
        let (cart, _) = checkout_ready(&ctx, &user).await?;
        let foreign = ctx.record_payment(other.id, Decimal::ONE).await;

        let result = ctx.orders.place_order(user.id, cart, foreign).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidArgument(_))),
            "expected InvalidArgument, got {result:?}"
        );

        assert!(ctx.carts.get_cart(cart).await?.is_open());

        Ok(())
    }

    #[tokio::test]
    async fn place_order_with_used_payment_returns_invalid_state() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (first_cart, payment) = checkout_ready(&ctx, &user).await?;

        ctx.orders.place_order(user.id, first_cart, payment).await?;

        let product = ctx
            .create_product(ctx.create_category("Shoes", "Hiking").await.id, Decimal::ONE, 1)
            .await;
        let second_cart = ctx.carts.add_item(user.id, product.id).await?.cart_id;

        let result = ctx.orders.place_order(user.id, second_cart, payment).await;

        assert!(
            matches!(
                result,
                Err(OrdersServiceError::InvalidState(
                    "payment has already been used for an order"
                ))
            ),
            "expected InvalidState, got {result:?}"
        );

        assert!(ctx.carts.get_cart(second_cart).await?.is_open());

        Ok(())
    }

    #[tokio::test]
    async fn place_order_for_another_users_cart_returns_invalid_state() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("ada@example.com").await;
        let intruder = ctx.create_user("eve@example.com").await;
        let (cart, _) = checkout_ready(&ctx, &owner).await?;
        let payment = ctx.record_payment(intruder.id, Decimal::ONE).await;

        let result = ctx.orders.place_order(intruder.id, cart, payment).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidState(_))),
            "expected InvalidState, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn place_order_unknown_references_return_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (cart, payment) = checkout_ready(&ctx, &user).await?;

        let unknown_user = ctx
            .orders
            .place_order(UserId::from_i64(404), cart, payment)
            .await;
        let unknown_cart = ctx
            .orders
            .place_order(user.id, CartId::from_i64(404), payment)
            .await;
        let unknown_payment = ctx
            .orders
            .place_order(user.id, cart, PaymentId::from_i64(404))
            .await;

        for result in [unknown_user, unknown_cart, unknown_payment] {
            assert!(
                matches!(result, Err(OrdersServiceError::NotFound)),
                "expected NotFound, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn get_order_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.orders.get_order(OrderId::from_i64(404)).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_orders_returns_orders_oldest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (first_cart, first_payment) = checkout_ready(&ctx, &user).await?;

        let first = ctx
            .orders
            .place_order(user.id, first_cart, first_payment)
            .await?;

        let product = ctx
            .create_product(ctx.create_category("Shoes", "Hiking").await.id, Decimal::ONE, 1)
            .await;
        let second_cart = ctx.carts.add_item(user.id, product.id).await?.cart_id;
        let second_payment = ctx.record_payment(user.id, Decimal::ONE).await;

        let second = ctx
            .orders
            .place_order(user.id, second_cart, second_payment)
            .await?;

        let orders = ctx.orders.list_orders(user.id).await?;

        assert_eq!(
            orders.iter().map(|o| o.id).collect::<Vec<_>>(),
            vec![first, second]
        );

        let previous = ctx.carts.get_previous_carts(user.id).await?;

        assert_eq!(
            previous.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![first_cart, second_cart]
        );

        Ok(())
    }

    #[tokio::test]
    async fn previous_carts_follow_order_sequence_not_ordered_on() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (first_cart, first_payment) = checkout_ready(&ctx, &user).await?;

        ctx.orders
            .place_order(user.id, first_cart, first_payment)
            .await?;

        let product = ctx
            .create_product(ctx.create_category("Shoes", "Hiking").await.id, Decimal::ONE, 1)
            .await;
        let second_cart = ctx.carts.add_item(user.id, product.id).await?.cart_id;
        let second_payment = ctx.record_payment(user.id, Decimal::ONE).await;

        ctx.orders
            .place_order(user.id, second_cart, second_payment)
            .await?;

        // Transaction start times can land out of order under contention.
        sqlx::query("UPDATE carts SET ordered_on = ordered_on + interval '1 hour' WHERE id = $1")
            .bind(first_cart.into_i64())
            .execute(ctx.db.pool())
            .await?;

        let previous = ctx.carts.get_previous_carts(user.id).await?;

        assert_eq!(
            previous.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![first_cart, second_cart]
        );

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_add_item_and_place_order_keep_ordered_cart_frozen() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (cart, payment) = checkout_ready(&ctx, &user).await?;
        let product = ctx
            .create_product(ctx.create_category("Shoes", "Trail").await.id, Decimal::ONE, 1)
            .await;

        let adds: Vec<_> = (0..6)
            .map(|_| {
                let carts = ctx.carts.clone();

                tokio::spawn(async move { carts.add_item(user.id, product.id).await })
            })
            .collect();

        let orders = ctx.orders.clone();
        let order =
            tokio::spawn(async move { orders.place_order(user.id, cart, payment).await });

        let mut added = Vec::new();

        for handle in adds {
            added.push(handle.await??);
        }

        order.await??;

        let ordered = ctx.carts.get_cart(cart).await?;
        let into_ordered = added.iter().filter(|item| item.cart_id == cart).count();

        assert!(!ordered.is_open());
        assert_eq!(ordered.items.len(), 2 + into_ordered);

        let later: Vec<_> = added.iter().filter(|item| item.cart_id != cart).collect();

        if let Some(first) = later.first() {
            assert!(
                later.iter().all(|item| item.cart_id == first.cart_id),
                "items after the order must share one new cart"
            );

            let active = ctx.carts.get_active_cart(user.id).await?;

            assert_eq!(active.map(|c| c.id), Some(first.cart_id));

            let last_ordered = ordered.items.iter().map(|i| i.id.into_i64()).max();
            let first_later = later.iter().map(|i| i.id.into_i64()).min();

            assert!(
                last_ordered < first_later,
                "ordered cart gained an item after it was ordered"
            );
        }

        let open: i64 = query_scalar("SELECT count(*) FROM carts WHERE user_id = $1 AND NOT ordered")
            .bind(user.id.into_i64())
            .fetch_one(ctx.db.pool())
            .await?;

        assert!(open <= 1, "expected at most one open cart, found {open}");
        assert_eq!(count_orders(&ctx, cart).await?, 1);

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_place_order_creates_exactly_one_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;
        let (cart, payment) = checkout_ready(&ctx, &user).await?;

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let orders = ctx.orders.clone();

                tokio::spawn(async move { orders.place_order(user.id, cart, payment).await })
            })
            .collect();

        let mut placed = 0;

        for handle in handles {
            match handle.await? {
                Ok(_) => placed += 1,
                Err(OrdersServiceError::InvalidState(_)) => {}
                Err(other) => return Err(other.into()),
            }
        }

        assert_eq!(placed, 1);
        assert_eq!(count_orders(&ctx, cart).await?, 1);

        Ok(())
    }
}
