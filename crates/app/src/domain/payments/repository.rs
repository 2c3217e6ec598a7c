//! Payments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    payments::{
        data::NewPayment,
        models::{Payment, PaymentId, PaymentMethod, PaymentMethodId},
    },
    users::models::UserId,
};

const LIST_PAYMENT_METHODS_SQL: &str = include_str!("sql/list_payment_methods.sql");
const GET_PAYMENT_METHOD_SQL: &str = include_str!("sql/get_payment_method.sql");
const CREATE_PAYMENT_SQL: &str = include_str!("sql/create_payment.sql");
const GET_PAYMENT_SQL: &str = include_str!("sql/get_payment.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentsRepository;

impl PgPaymentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_payment_methods(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PaymentMethod>, sqlx::Error> {
        query_as::<Postgres, PaymentMethod>(LIST_PAYMENT_METHODS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_payment_method(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        method: PaymentMethodId,
    ) -> Result<PaymentMethod, sqlx::Error> {
        query_as::<Postgres, PaymentMethod>(GET_PAYMENT_METHOD_SQL)
            .bind(method.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payment: NewPayment,
    ) -> Result<Payment, sqlx::Error> {
        query_as::<Postgres, Payment>(CREATE_PAYMENT_SQL)
            .bind(payment.user.into_i64())
            .bind(payment.amount)
            .bind(payment.method.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payment: PaymentId,
    ) -> Result<Payment, sqlx::Error> {
        query_as::<Postgres, Payment>(GET_PAYMENT_SQL)
            .bind(payment.into_i64())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PaymentMethod {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: PaymentMethodId::from_i64(row.try_get("id")?),
            kind: row.try_get("kind")?,
            provider: row.try_get("provider")?,
            available: row.try_get("available")?,
            reason: row.try_get("reason")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Payment {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: PaymentId::from_i64(row.try_get("id")?),
            user_id: UserId::from_i64(row.try_get("user_id")?),
            amount: row.try_get("amount")?,
            payment_method: PaymentMethodId::from_i64(row.try_get("payment_method_id")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
