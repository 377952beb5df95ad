use std::collections::HashMap;

use super::StoreError;

/// Разбирает фильтр равенства по идентификатору (`id=eq.5`).
///
/// Все параметры кроме `select` считаются фильтрами; поддерживается только `id` и оператор `eq`.
pub fn id_filter(params: &HashMap<String, String>) -> Result<Option<i64>, StoreError> {
    let mut id = None;
    for (column, expr) in params {
        if column == "select" {
            continue;
        }
        if column != "id" {
            return Err(StoreError::UnsupportedFilter(format!("{column}={expr}")));
        }
        let value = expr
            .strip_prefix("eq.")
            .ok_or_else(|| StoreError::UnsupportedFilter(format!("{column}={expr}")))?;
        let parsed = value
            .trim()
            .parse::<i64>()
            .map_err(|_| StoreError::BadRequest(format!("invalid id value: {value}")))?;
        id = Some(parsed);
    }
    Ok(id)
}

/// То же, но фильтр обязателен (update/delete без фильтра не выполняются)
pub fn required_id_filter(params: &HashMap<String, String>) -> Result<i64, StoreError> {
    id_filter(params)?.ok_or(StoreError::MissingFilter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_eq_filter_parsed() {
        assert_eq!(id_filter(&params(&[("id", "eq.42")])).unwrap(), Some(42));
        assert_eq!(
            id_filter(&params(&[("select", "*"), ("id", "eq.7")])).unwrap(),
            Some(7)
        );
        assert_eq!(id_filter(&params(&[("select", "*")])).unwrap(), None);
    }

    #[test]
    fn test_unsupported_filters_rejected() {
        assert!(matches!(
            id_filter(&params(&[("name", "eq.Tools")])),
            Err(StoreError::UnsupportedFilter(_))
        ));
        assert!(matches!(
            id_filter(&params(&[("id", "gt.3")])),
            Err(StoreError::UnsupportedFilter(_))
        ));
        assert!(matches!(
            id_filter(&params(&[("id", "eq.abc")])),
            Err(StoreError::BadRequest(_))
        ));
    }

    #[test]
    fn test_mutations_require_filter() {
        assert!(matches!(
            required_id_filter(&params(&[])),
            Err(StoreError::MissingFilter)
        ));
        assert_eq!(required_id_filter(&params(&[("id", "eq.3")])).unwrap(), 3);
    }
}
