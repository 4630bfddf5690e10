pub mod request;
pub mod response;

pub use request::StockGridRequest;
pub use response::StockGridResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct StockGridScan;

impl UseCaseMetadata for StockGridScan {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "stock_grid"
    }

    fn display_name() -> &'static str {
        "Grade de estoque WBuy"
    }

    fn description() -> &'static str {
        "Varre o catálogo paginado e monta a grade produto → cor → tamanho"
    }
}
