use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::reception_csv_datasource::{
        ReceptionCsvDatasource, ReceptionCsvDatasourceImpl,
    },
    domain::repositories::rows_repository::RowsRepository,
    entities::{HierarchyConfig, TransactionRow},
};

pub(crate) struct RowsRepositoryImpl<DS = ReceptionCsvDatasourceImpl>
where
    DS: ReceptionCsvDatasource,
{
    reception_datasource: DS,
}

#[async_trait]
impl<DS> RowsRepository for RowsRepositoryImpl<DS>
where
    DS: ReceptionCsvDatasource,
{
    fn from_string(&self, reception_csv: &str) -> Result<Vec<TransactionRow>, ServerError> {
        self.reception_datasource.from_string(reception_csv)
    }

    async fn from_file<P>(&self, reception_csv: P) -> Result<Vec<TransactionRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.reception_datasource.from_file(reception_csv).await
    }
}

impl RowsRepositoryImpl<ReceptionCsvDatasourceImpl> {
    pub(crate) fn new(config: &HierarchyConfig) -> Self {
        RowsRepositoryImpl {
            reception_datasource: ReceptionCsvDatasourceImpl::new(config),
        }
    }
}
