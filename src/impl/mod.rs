// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod reception_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod hierarchy_config_model;
        pub(crate) mod numeric_cell_model;
        pub(crate) mod position_number_model;
        pub(crate) mod reception_date_model;
        pub(crate) mod transaction_type_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod rows_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod group_node;
        pub(crate) mod hierarchy_config;
        pub(crate) mod reception_hierarchy;
        pub(crate) mod transaction_row;
    }
    pub(crate) mod logic {
        pub(crate) mod grouping;
        pub(crate) mod hierarchy_processor;
        pub(crate) mod totals;
    }
    pub(crate) mod repositories {
        pub(crate) mod rows_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod build_hierarchy_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod expansion_state;
    pub(crate) mod hierarchy_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::group_node::*;
        pub use crate::domain::entities::hierarchy_config::*;
        pub use crate::domain::entities::reception_hierarchy::*;
        pub use crate::domain::entities::transaction_row::*;
        pub use crate::domain::logic::grouping::base_name;
    }

    pub mod display {
        pub use crate::presentation::expansion_state::*;
    }
}
