//! Offers Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::offers::models::{Offer, OfferId};

const GET_OFFER_SQL: &str = include_str!("sql/get_offer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOffersRepository;

impl PgOffersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        offer: OfferId,
    ) -> Result<Offer, sqlx::Error> {
        query_as::<Postgres, Offer>(GET_OFFER_SQL)
            .bind(offer.into_i64())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Offer {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let discount: i32 = row.try_get("discount")?;

        Ok(Self {
            id: OfferId::from_i64(row.try_get("id")?),
            title: row.try_get("title")?,
            discount: u32::try_from(discount).map_err(|e| sqlx::Error::ColumnDecode {
                index: "discount".to_string(),
                source: Box::new(e),
            })?,
        })
    }
}
