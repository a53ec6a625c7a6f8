use fractic_server_error::ServerError;

use crate::{
    domain::usecases::build_hierarchy_usecase::{
        BuildHierarchyUsecase as _, BuildHierarchyUsecaseImpl,
    },
    entities::{HierarchyConfig, ReceptionPreview, TransactionRow},
    errors::JsonExportFailed,
    presentation::{
        expansion_state::ExpansionState, hierarchy_printer::HierarchyPrinter,
    },
};

/// Plain-text rendering of a reception preview.
pub type Outline = String;

pub struct ReceptionHierarchyUtil {
    build_hierarchy_usecase: BuildHierarchyUsecaseImpl,
    printer: HierarchyPrinter,
}

impl ReceptionHierarchyUtil {
    pub fn new(config: HierarchyConfig) -> Self {
        Self {
            printer: HierarchyPrinter::new(&config),
            build_hierarchy_usecase: BuildHierarchyUsecaseImpl::new(config),
        }
    }

    /// Builds the hierarchy from rows that are already in memory.
    pub fn from_rows(&self, rows: Vec<TransactionRow>) -> Result<ReceptionPreview, ServerError> {
        self.build_hierarchy_usecase.from_rows(rows)
    }

    /// Reads a reception sheet from CSV text. The outline is fully expanded.
    pub async fn from_string(
        &self,
        reception_csv: &str,
    ) -> Result<(ReceptionPreview, Outline), ServerError> {
        let preview = self
            .build_hierarchy_usecase
            .from_string(reception_csv)
            .await?;
        let outline = self.printer.print(&preview, &ExpansionState::new());
        Ok((preview, outline))
    }

    /// Reads a reception sheet from a CSV file. The outline is fully expanded.
    pub async fn from_file<T>(
        &self,
        reception_csv: T,
    ) -> Result<(ReceptionPreview, Outline), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let preview = self
            .build_hierarchy_usecase
            .from_file(reception_csv)
            .await?;
        let outline = self.printer.print(&preview, &ExpansionState::new());
        Ok((preview, outline))
    }

    pub fn print(&self, preview: &ReceptionPreview, state: &ExpansionState) -> Outline {
        self.printer.print(preview, state)
    }

    pub fn to_json(&self, preview: &ReceptionPreview) -> Result<String, ServerError> {
        serde_json::to_string_pretty(preview).map_err(|e| JsonExportFailed::with_debug(&e))
    }
}

impl Default for ReceptionHierarchyUtil {
    fn default() -> Self {
        Self::new(HierarchyConfig::default())
    }
}
