/// Параметр `select` табличного запроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    columns: String,
    embeds: Vec<(String, String)>,
}

impl SelectQuery {
    /// `select=*`
    pub fn all() -> Self {
        Self::columns("*")
    }

    pub fn columns(columns: &str) -> Self {
        Self {
            columns: columns.to_string(),
            embeds: Vec::new(),
        }
    }

    /// Встраивание связанной таблицы: `.embed("categories", "id,name")`
    pub fn embed(mut self, table: &str, columns: &str) -> Self {
        self.embeds.push((table.to_string(), columns.to_string()));
        self
    }

    pub fn embeds(&self, table: &str) -> bool {
        self.embeds.iter().any(|(t, _)| t == table)
    }

    pub fn select_param(&self) -> String {
        let mut parts = vec![self.columns.clone()];
        parts.extend(
            self.embeds
                .iter()
                .map(|(table, columns)| format!("{}({})", table, columns)),
        );
        parts.join(",")
    }

    pub fn to_query_string(&self) -> String {
        format!("select={}", urlencoding::encode(&self.select_param()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_param() {
        assert_eq!(SelectQuery::all().select_param(), "*");
        assert_eq!(SelectQuery::columns("id,name").select_param(), "id,name");

        let q = SelectQuery::all().embed("categories", "id,name");
        assert_eq!(q.select_param(), "*,categories(id,name)");
        assert!(q.embeds("categories"));
        assert_eq!(
            q.to_query_string(),
            "select=%2A%2Ccategories%28id%2Cname%29"
        );
    }
}
