/// Metadados de identificação e documentação de um UseCase
pub trait UseCaseMetadata {
    /// Índice do UseCase (ex.: "u101")
    fn usecase_index() -> &'static str;

    /// Nome técnico (ex.: "order_lookup")
    fn usecase_name() -> &'static str;

    /// Nome de exibição (ex.: "Consulta de pedido WBuy")
    fn display_name() -> &'static str;

    /// Descrição do UseCase
    fn description() -> &'static str {
        ""
    }

    /// Nome completo no formato "u101_order_lookup"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
