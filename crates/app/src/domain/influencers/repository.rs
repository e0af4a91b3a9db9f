//! Influencers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::influencers::{
    data::{Accounts, NewInfluencer},
    filter::NameFilter,
    records::{InfluencerRecord, InfluencerUuid},
};

const LIST_INFLUENCERS_SQL: &str = include_str!("sql/list_influencers.sql");
const CREATE_INFLUENCER_SQL: &str = include_str!("sql/create_influencer.sql");
const DELETE_INFLUENCER_SQL: &str = include_str!("sql/delete_influencer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInfluencersRepository;

impl PgInfluencersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_influencers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: Option<&NameFilter>,
    ) -> Result<Vec<InfluencerRecord>, sqlx::Error> {
        query_as::<Postgres, InfluencerRecord>(LIST_INFLUENCERS_SQL)
            .bind(filter.map(NameFilter::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_influencer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: InfluencerUuid,
        influencer: &NewInfluencer,
    ) -> Result<InfluencerRecord, sqlx::Error> {
        query_as::<Postgres, InfluencerRecord>(CREATE_INFLUENCER_SQL)
            .bind(uuid.into_uuid())
            .bind(influencer.name())
            .bind(influencer.last_name())
            .bind(&influencer.accounts().tiktok)
            .bind(&influencer.accounts().instagram)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_influencer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: InfluencerUuid,
    ) -> Result<Option<InfluencerRecord>, sqlx::Error> {
        query_as::<Postgres, InfluencerRecord>(DELETE_INFLUENCER_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for InfluencerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: InfluencerUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            last_name: row.try_get("last_name")?,
            accounts: Accounts {
                tiktok: row.try_get("tiktok")?,
                instagram: row.try_get("instagram")?,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
