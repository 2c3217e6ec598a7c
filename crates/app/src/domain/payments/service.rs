//! Payments service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::payments::{
        data::NewPayment,
        errors::PaymentsServiceError,
        models::{Payment, PaymentId, PaymentMethod},
        repository::PgPaymentsRepository,
    },
    money,
};

#[derive(Debug, Clone)]
pub struct PgPaymentsService {
    db: Db,
    repository: PgPaymentsRepository,
}

impl PgPaymentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPaymentsRepository::new(),
        }
    }
}

#[async_trait]
impl PaymentsService for PgPaymentsService {
    #[tracing::instrument(
        name = "payments.service.record_payment",
        skip(self, payment),
        fields(
            user_id = %payment.user,
            payment_method_id = %payment.method,
            amount = %payment.amount
        ),
        err
    )]
    async fn record_payment(&self, payment: NewPayment) -> Result<PaymentId, PaymentsServiceError> {
        money::ensure_payment_amount(payment.amount)?;

        let mut tx = self.db.begin().await?;

        let method = self
            .repository
            .get_payment_method(&mut tx, payment.method)
            .await?;

        if !method.available {
            return Err(PaymentsServiceError::InvalidState(
                "payment method is not available",
            ));
        }

        let recorded = self.repository.create_payment(&mut tx, payment).await?;

        tx.commit().await?;

        info!(payment_id = %recorded.id, "recorded payment");

        Ok(recorded.id)
    }

    async fn get_payment(&self, payment: PaymentId) -> Result<Payment, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        let payment = self.repository.get_payment(&mut tx, payment).await?;

        tx.commit().await?;

        Ok(payment)
    }

    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        let methods = self.repository.list_payment_methods(&mut tx).await?;

        tx.commit().await?;

        Ok(methods)
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Records a payment made by a user with an available payment method.
    async fn record_payment(&self, payment: NewPayment) -> Result<PaymentId, PaymentsServiceError>;

    /// Retrieve a single payment.
    async fn get_payment(&self, payment: PaymentId) -> Result<Payment, PaymentsServiceError>;

    /// All payment methods, including unavailable ones.
    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, PaymentsServiceError>;
}
