use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::rows_repository_impl::RowsRepositoryImpl,
    domain::{
        logic::hierarchy_processor::HierarchyProcessor,
        repositories::rows_repository::RowsRepository,
    },
    entities::{HierarchyConfig, ReceptionPreview, TransactionRow},
};

#[async_trait]
pub trait BuildHierarchyUsecase: Send + Sync {
    fn from_rows(&self, rows: Vec<TransactionRow>) -> Result<ReceptionPreview, ServerError>;

    async fn from_string(&self, reception_csv: &str) -> Result<ReceptionPreview, ServerError>;

    async fn from_file<P>(&self, reception_csv: P) -> Result<ReceptionPreview, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct BuildHierarchyUsecaseImpl<
    R1 = RowsRepositoryImpl, // Default.
> where
    R1: RowsRepository,
{
    rows_repository: R1,
    config: HierarchyConfig,
}

#[async_trait]
impl<R1> BuildHierarchyUsecase for BuildHierarchyUsecaseImpl<R1>
where
    R1: RowsRepository,
{
    fn from_rows(&self, rows: Vec<TransactionRow>) -> Result<ReceptionPreview, ServerError> {
        Ok(HierarchyProcessor::new(rows, &self.config).process())
    }

    async fn from_string(&self, reception_csv: &str) -> Result<ReceptionPreview, ServerError> {
        let rows = self.rows_repository.from_string(reception_csv)?;
        self.from_rows(rows)
    }

    async fn from_file<P>(&self, reception_csv: P) -> Result<ReceptionPreview, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let rows = self.rows_repository.from_file(reception_csv).await?;
        self.from_rows(rows)
    }
}

impl BuildHierarchyUsecaseImpl {
    pub(crate) fn new(config: HierarchyConfig) -> Self {
        BuildHierarchyUsecaseImpl {
            rows_repository: RowsRepositoryImpl::new(&config),
            config,
        }
    }
}
