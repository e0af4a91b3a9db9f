//! Influencers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::influencers::{
        data::InfluencerDraft,
        errors::InfluencersServiceError,
        filter::NameFilter,
        records::{InfluencerRecord, InfluencerUuid},
        repository::PgInfluencersRepository,
        validation::validate,
    },
};

#[derive(Debug, Clone)]
pub struct PgInfluencersService {
    db: Db,
    repository: PgInfluencersRepository,
}

impl PgInfluencersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgInfluencersRepository::new(),
        }
    }
}

#[async_trait]
impl InfluencersService for PgInfluencersService {
    async fn list_influencers(
        &self,
        filter: Option<NameFilter>,
    ) -> Result<Vec<InfluencerRecord>, InfluencersServiceError> {
        let mut tx = self.db.begin().await?;

        let influencers = self
            .repository
            .list_influencers(&mut tx, filter.as_ref())
            .await?;

        tx.commit().await?;

        Ok(influencers)
    }

    async fn create_influencer(
        &self,
        draft: InfluencerDraft,
    ) -> Result<InfluencerRecord, InfluencersServiceError> {
        let influencer = validate(draft)?;
        let uuid = InfluencerUuid::new();

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_influencer(&mut tx, uuid, &influencer)
            .await?;

        tx.commit().await?;

        debug!(influencer_uuid = %created.uuid, "stored influencer");

        Ok(created)
    }

    async fn delete_influencer(
        &self,
        influencer: InfluencerUuid,
    ) -> Result<InfluencerRecord, InfluencersServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(deleted) = self
            .repository
            .delete_influencer(&mut tx, influencer)
            .await?
        else {
            return Err(InfluencersServiceError::NotFound);
        };

        tx.commit().await?;

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait InfluencersService: Send + Sync {
    /// Retrieves influencers in insertion order, optionally filtered by name.
    async fn list_influencers(
        &self,
        filter: Option<NameFilter>,
    ) -> Result<Vec<InfluencerRecord>, InfluencersServiceError>;

    /// Validates, normalises and stores a new influencer.
    async fn create_influencer(
        &self,
        draft: InfluencerDraft,
    ) -> Result<InfluencerRecord, InfluencersServiceError>;

    /// Deletes an influencer, returning the removed record.
    async fn delete_influencer(
        &self,
        influencer: InfluencerUuid,
    ) -> Result<InfluencerRecord, InfluencersServiceError>;
}
