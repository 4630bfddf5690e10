pub mod request;
pub mod response;

pub use request::OrderLookupRequest;
pub use response::OrderLookupResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct OrderLookup;

impl UseCaseMetadata for OrderLookup {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "order_lookup"
    }

    fn display_name() -> &'static str {
        "Consulta de pedido WBuy"
    }

    fn description() -> &'static str {
        "Busca um pedido por ID ou código de rastreio e resolve frete e rastreio"
    }
}
