use contracts::domain::a002_stock_item::StockItem;
use contracts::domain::a003_stock_grid::StockGrid;

/// Fold normalized stock rows into the produto → cor → tamanho grid.
///
/// Duplicate (produto, cor, tamanho) triples are summed: the upstream's
/// paginated listing repeats SKUs and an overwrite would silently drop
/// stock. Map order is first-seen order all the way down.
///
/// `expected_sizes` drives the completeness check: a (produto, cor) pair
/// missing any expected size (total <= 0) comes out `desgradiado`, with
/// `faltando` listing the holes in the expected order. An empty
/// `expected_sizes` disables the check entirely.
pub fn build_grid(rows: &[StockItem], expected_sizes: &[String]) -> StockGrid {
    let mut grid = StockGrid::default();

    for row in rows {
        let product = grid.produtos.entry(row.product_name.clone()).or_default();
        let color = product.cores.entry(row.color.clone()).or_default();
        *color.tamanhos.entry(row.size.clone()).or_insert(0) += row.quantity;
    }

    if expected_sizes.is_empty() {
        return grid;
    }

    for product in grid.produtos.values_mut() {
        for color in product.cores.values_mut() {
            color.faltando = expected_sizes
                .iter()
                .filter(|size| color.tamanhos.get(size.as_str()).copied().unwrap_or(0) <= 0)
                .cloned()
                .collect();
            color.desgradiado = !color.faltando.is_empty();
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product: &str, color: &str, size: &str, quantity: i64) -> StockItem {
        StockItem {
            sku: format!("{product}-{color}-{size}"),
            product_name: product.to_string(),
            size: size.to_string(),
            color: color.to_string(),
            quantity,
            active: true,
            sellable: true,
        }
    }

    fn sizes(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_duplicate_rows_are_summed_not_overwritten() {
        let rows = vec![row("A", "Azul", "M", 3), row("A", "Azul", "M", 2)];
        let grid = build_grid(&rows, &[]);
        assert_eq!(grid.produtos["A"].cores["Azul"].tamanhos["M"], 5);
    }

    #[test]
    fn test_missing_expected_size_marks_desgradiado() {
        let rows = vec![row("A", "Azul", "M", 4), row("A", "Azul", "G", 1)];
        let grid = build_grid(&rows, &sizes(&["P", "M", "G"]));

        let color = &grid.produtos["A"].cores["Azul"];
        assert!(color.desgradiado);
        assert_eq!(color.faltando, vec!["P".to_string()]);
    }

    #[test]
    fn test_zeroed_size_counts_as_missing() {
        let rows = vec![row("A", "Azul", "P", 0), row("A", "Azul", "M", 2)];
        let grid = build_grid(&rows, &sizes(&["P", "M"]));
        assert_eq!(grid.produtos["A"].cores["Azul"].faltando, vec!["P".to_string()]);
    }

    #[test]
    fn test_faltando_keeps_expected_order() {
        let rows = vec![row("A", "Azul", "M", 1)];
        let grid = build_grid(&rows, &sizes(&["GG", "P", "M", "G"]));
        assert_eq!(
            grid.produtos["A"].cores["Azul"].faltando,
            sizes(&["GG", "P", "G"])
        );
    }

    #[test]
    fn test_empty_expected_sizes_never_flags() {
        let rows = vec![row("A", "Azul", "M", 1), row("B", "Rosa", "P", 0)];
        let grid = build_grid(&rows, &[]);
        for product in grid.produtos.values() {
            for color in product.cores.values() {
                assert!(!color.desgradiado);
                assert!(color.faltando.is_empty());
            }
        }
    }

    #[test]
    fn test_completeness_is_per_product_color_pair() {
        let rows = vec![
            row("A", "Azul", "P", 1),
            row("A", "Azul", "M", 1),
            row("A", "Rosa", "P", 1),
        ];
        let grid = build_grid(&rows, &sizes(&["P", "M"]));
        assert!(!grid.produtos["A"].cores["Azul"].desgradiado);
        assert!(grid.produtos["A"].cores["Rosa"].desgradiado);
        assert_eq!(grid.produtos["A"].cores["Rosa"].faltando, sizes(&["M"]));
    }

    #[test]
    fn test_iteration_order_is_first_seen() {
        let rows = vec![
            row("Z", "Verde", "M", 1),
            row("A", "Azul", "M", 1),
            row("Z", "Amarelo", "P", 1),
        ];
        let grid = build_grid(&rows, &[]);
        let products: Vec<&String> = grid.produtos.keys().collect();
        assert_eq!(products, vec!["Z", "A"]);
        let colors: Vec<&String> = grid.produtos["Z"].cores.keys().collect();
        assert_eq!(colors, vec!["Verde", "Amarelo"]);
    }
}
