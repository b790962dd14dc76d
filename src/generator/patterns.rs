use super::{
    GeneratedQuery, ID_COLUMN, Intent, Pattern, Target, extract_limit, first_non_id_column
};

/// "count" anywhere in the question
pub struct CountPattern;

impl Pattern for CountPattern {
    fn intent(&self) -> Intent {
        Intent::Count
    }

    fn matches(&self, question: &str) -> bool {
        question.contains("count")
    }

    fn build(&self, _question: &str, target: &Target<'_>) -> GeneratedQuery {
        let table = target.table;
        GeneratedQuery {
            query_text:  format!("SELECT COUNT(*) FROM {table}"),
            explanation: format!(
                "This query counts the total number of records in the {table} table."
            ),
            intent:      self.intent(),
            table:       table.to_string()
        }
    }
}

/// "average", "avg" or "mean"
pub struct AveragePattern;

impl Pattern for AveragePattern {
    fn intent(&self) -> Intent {
        Intent::Average
    }

    fn matches(&self, question: &str) -> bool {
        ["average", "avg", "mean"]
            .iter()
            .any(|word| question.contains(word))
    }

    fn build(&self, _question: &str, target: &Target<'_>) -> GeneratedQuery {
        let table = target.table;
        let column = first_non_id_column(&target.columns);
        GeneratedQuery {
            query_text:  format!("SELECT AVG({column}) FROM {table}"),
            explanation: format!(
                "This query calculates the average of {column} in the {table} table."
            ),
            intent:      self.intent(),
            table:       table.to_string()
        }
    }
}

/// "top" or "highest", with an optional row count
pub struct TopNPattern {
    pub default_limit: u64
}

impl Pattern for TopNPattern {
    fn intent(&self) -> Intent {
        Intent::TopN
    }

    fn matches(&self, question: &str) -> bool {
        question.contains("top") || question.contains("highest")
    }

    fn build(&self, question: &str, target: &Target<'_>) -> GeneratedQuery {
        let table = target.table;
        let limit = extract_limit(question).unwrap_or(self.default_limit);
        let order_col = first_non_id_column(&target.columns);
        let listed: Vec<&str> = target
            .columns
            .iter()
            .copied()
            .filter(|c| *c != ID_COLUMN)
            .collect();
        let listed = if listed.is_empty() {
            target.columns.join(", ")
        } else {
            listed.join(", ")
        };
        GeneratedQuery {
            query_text:  format!(
                "SELECT {listed} FROM {table} ORDER BY {order_col} DESC LIMIT {limit}"
            ),
            explanation: format!(
                "This query returns the top {limit} records from {table} ordered by {order_col} in descending order."
            ),
            intent:      self.intent(),
            table:       table.to_string()
        }
    }
}

/// Literal "group by"
pub struct GroupByPattern;

impl Pattern for GroupByPattern {
    fn intent(&self) -> Intent {
        Intent::GroupBy
    }

    fn matches(&self, question: &str) -> bool {
        question.contains("group by")
    }

    fn build(&self, _question: &str, target: &Target<'_>) -> GeneratedQuery {
        let table = target.table;
        let group_col = first_non_id_column(&target.columns);
        let agg_col = target
            .columns
            .iter()
            .find(|c| **c != group_col && **c != ID_COLUMN)
            .or_else(|| target.columns.iter().find(|c| **c != group_col))
            .copied()
            .unwrap_or(group_col);
        GeneratedQuery {
            query_text:  format!(
                "SELECT {group_col}, COUNT({agg_col}) FROM {table} GROUP BY {group_col}"
            ),
            explanation: format!(
                "This query groups the {table} data by {group_col} and counts the occurrences in each group."
            ),
            intent:      self.intent(),
            table:       table.to_string()
        }
    }
}

/// Fallback listing, always matches
pub struct ListingPattern {
    pub limit: u64
}

impl Pattern for ListingPattern {
    fn intent(&self) -> Intent {
        Intent::Default
    }

    fn matches(&self, _question: &str) -> bool {
        true
    }

    fn build(&self, _question: &str, target: &Target<'_>) -> GeneratedQuery {
        let table = target.table;
        let limit = self.limit;
        GeneratedQuery {
            query_text:  format!(
                "SELECT {} FROM {table} LIMIT {limit}",
                target.columns.join(", ")
            ),
            explanation: format!(
                "This query selects all columns from the {table} table and returns the first {limit} rows."
            ),
            intent:      self.intent(),
            table:       table.to_string()
        }
    }
}
