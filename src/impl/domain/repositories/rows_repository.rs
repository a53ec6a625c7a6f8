use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::TransactionRow;

#[async_trait]
pub trait RowsRepository: Send + Sync {
    fn from_string(&self, reception_csv: &str) -> Result<Vec<TransactionRow>, ServerError>;

    async fn from_file<P>(&self, reception_csv: P) -> Result<Vec<TransactionRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
