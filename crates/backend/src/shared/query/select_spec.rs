use serde_json::{Map, Value};

use super::{StoreError, TableName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Columns {
    All,
    Only(Vec<String>),
}

impl Columns {
    fn push(&mut self, column: String) {
        match self {
            Columns::All => {}
            Columns::Only(list) => {
                if !list.contains(&column) {
                    list.push(column);
                }
            }
        }
    }

    fn keeps(&self, column: &str) -> bool {
        match self {
            Columns::All => true,
            Columns::Only(list) => list.iter().any(|c| c == column),
        }
    }
}

/// Встраивание связанной таблицы: `categories(id,name)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub table: String,
    pub columns: Columns,
}

/// Разобранный параметр `select`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectSpec {
    pub columns: Columns,
    pub embeds: Vec<Embed>,
}

impl Default for SelectSpec {
    fn default() -> Self {
        Self {
            columns: Columns::All,
            embeds: Vec::new(),
        }
    }
}

impl SelectSpec {
    /// Разбор `*`, `id,name`, `*,categories(id,name)`. Пустая строка равна `*`.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let mut columns = Columns::Only(Vec::new());
        let mut embeds = Vec::new();

        for item in split_top_level(raw)? {
            let item = item.trim();
            if item.is_empty() {
                return Err(StoreError::BadSelect(format!("empty item in \"{raw}\"")));
            }
            if item == "*" {
                columns = Columns::All;
                continue;
            }
            if let Some(open) = item.find('(') {
                let table = item[..open].trim();
                let inner = item[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| StoreError::BadSelect(format!("unbalanced \"{item}\"")))?;
                if !is_identifier(table) {
                    return Err(StoreError::BadSelect(format!("bad relation name \"{table}\"")));
                }
                if inner.contains('(') {
                    return Err(StoreError::BadSelect(format!(
                        "nested embedding is not supported: \"{item}\""
                    )));
                }
                embeds.push(Embed {
                    table: table.to_string(),
                    columns: parse_column_list(inner)?,
                });
                continue;
            }
            if !is_identifier(item) {
                return Err(StoreError::BadSelect(format!("bad column name \"{item}\"")));
            }
            columns.push(item.to_string());
        }

        Ok(Self { columns, embeds })
    }

    /// Проверка колонок и встраиваний по схеме таблицы
    pub fn check(&self, table: TableName) -> Result<(), StoreError> {
        if let Columns::Only(list) = &self.columns {
            for column in list {
                if !table.columns().contains(&column.as_str()) {
                    return Err(StoreError::BadSelect(format!(
                        "column {}.{} does not exist",
                        table.as_str(),
                        column
                    )));
                }
            }
        }
        for embed in &self.embeds {
            let allowed = table.embeddable(&embed.table).ok_or_else(|| {
                StoreError::BadSelect(format!(
                    "no relationship between {} and {}",
                    table.as_str(),
                    embed.table
                ))
            })?;
            if let Columns::Only(list) = &embed.columns {
                if let Some(bad) = list.iter().find(|c| !allowed.contains(&c.as_str())) {
                    return Err(StoreError::BadSelect(format!(
                        "column {}.{} is not available for embedding",
                        embed.table, bad
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn embeds(&self, table: &str) -> bool {
        self.embeds.iter().any(|e| e.table == table)
    }

    /// Оставляет в строке только запрошенные колонки и встраивания
    pub fn project(&self, row: Value) -> Value {
        let Value::Object(map) = row else {
            return row;
        };
        let mut out = Map::new();
        for (key, value) in map {
            if let Some(embed) = self.embeds.iter().find(|e| e.table == key) {
                out.insert(key, project_object(&embed.columns, value));
            } else if self.columns.keeps(&key) && !self.is_relation_key(&key) {
                out.insert(key, value);
            }
        }
        Value::Object(out)
    }

    // Ключ связи появляется в строке только при явном встраивании
    fn is_relation_key(&self, key: &str) -> bool {
        key == "categories" && !self.embeds(key)
    }
}

fn project_object(columns: &Columns, value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(k, _)| columns.keeps(k))
                .collect(),
        ),
        other => other,
    }
}

fn parse_column_list(raw: &str) -> Result<Columns, StoreError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return Ok(Columns::All);
    }
    let mut columns = Columns::Only(Vec::new());
    for column in raw.split(',').map(str::trim) {
        if column == "*" {
            return Ok(Columns::All);
        }
        if !is_identifier(column) {
            return Err(StoreError::BadSelect(format!("bad column name \"{column}\"")));
        }
        columns.push(column.to_string());
    }
    Ok(columns)
}

fn split_top_level(raw: &str) -> Result<Vec<&str>, StoreError> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in raw.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| StoreError::BadSelect(format!("unbalanced \"{raw}\"")))?;
            }
            ',' if depth == 0 => {
                items.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(StoreError::BadSelect(format!("unbalanced \"{raw}\"")));
    }
    items.push(&raw[start..]);
    Ok(items)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_star_and_empty_select_everything() {
        assert_eq!(SelectSpec::parse("*").unwrap(), SelectSpec::default());
        assert_eq!(SelectSpec::parse("").unwrap(), SelectSpec::default());
    }

    #[test]
    fn test_star_with_category_embed() {
        let spec = SelectSpec::parse("*, categories(id, name)").unwrap();
        assert_eq!(spec.columns, Columns::All);
        assert_eq!(
            spec.embeds,
            vec![Embed {
                table: "categories".into(),
                columns: Columns::Only(vec!["id".into(), "name".into()]),
            }]
        );
        assert!(spec.check(TableName::Products).is_ok());
        assert!(spec.check(TableName::Categories).is_err());
    }

    #[test]
    fn test_column_list_checked_against_table() {
        let spec = SelectSpec::parse("id,name").unwrap();
        assert!(spec.check(TableName::Categories).is_ok());

        let spec = SelectSpec::parse("id,quantity").unwrap();
        assert!(matches!(
            spec.check(TableName::Categories),
            Err(StoreError::BadSelect(_))
        ));
    }

    #[test]
    fn test_malformed_select_rejected() {
        for raw in ["id,,name", "categories(id", "id)", "Name", "categories(products(id))"] {
            assert!(
                matches!(SelectSpec::parse(raw), Err(StoreError::BadSelect(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_project_keeps_requested_columns_and_embed() {
        let row = json!({
            "id": 1,
            "name": "Hammer",
            "quantity": 3,
            "categories": {"id": 2, "name": "Tools"}
        });

        let spec = SelectSpec::parse("name,categories(name)").unwrap();
        assert_eq!(
            spec.project(row.clone()),
            json!({"name": "Hammer", "categories": {"name": "Tools"}})
        );

        let spec = SelectSpec::parse("*").unwrap();
        assert_eq!(
            spec.project(row),
            json!({"id": 1, "name": "Hammer", "quantity": 3})
        );
    }
}
