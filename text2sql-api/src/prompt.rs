use regex::Regex;

/// Sentinel returned when no SQL statement can be found in the model
/// answer. Deliberately surfaced with HTTP 200, matching the upstream
/// contract.
pub const SQL_NOT_GENERATED: &str = "Could not generate SQL query.";

pub const UNKNOWN_TABLE: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description provided";

/// Render the fixed instruction template sent as the system message.
pub fn build_prompt(table_name: &str, table_description: &str, question: &str) -> String {
    format!(
        r#"You are an AI specializing in converting English questions into SQL queries.
- If a table schema is provided, generate the SQL query based strictly on that schema.
- If no schema is provided, assume reasonable default column names and data types based on the context of the question.

Here is the information:
- Table Name: {table_name}
- Question: "{question}"
- Description: {table_description}

Generate the SQL query based on this information, ensuring it is syntactically correct and formatted for readability."#
    )
}

/// Extract the first `SELECT ... ;` span from the model answer. The
/// keyword match is case-sensitive and the span may cross newlines.
pub fn extract_sql(text: &str) -> String {
    let pattern = Regex::new(r"(?s)SELECT .*?;").unwrap();
    match pattern.find(text) {
        Some(found) => found.as_str().trim().to_string(),
        None => SQL_NOT_GENERATED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_select_span() {
        let answer = "Here you go:\nSELECT a FROM b; and also SELECT c FROM d;";
        assert_eq!(extract_sql(answer), "SELECT a FROM b;");
    }

    #[test]
    fn span_crosses_newlines() {
        let answer = "SELECT a,\n       b\nFROM orders\nWHERE x = 1;";
        assert_eq!(
            extract_sql(answer),
            "SELECT a,\n       b\nFROM orders\nWHERE x = 1;"
        );
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        assert_eq!(extract_sql("select a from b;"), SQL_NOT_GENERATED);
    }

    #[test]
    fn missing_semicolon_yields_sentinel() {
        assert_eq!(extract_sql("SELECT a FROM b"), SQL_NOT_GENERATED);
    }

    #[test]
    fn prompt_carries_name_question_and_description() {
        let prompt = build_prompt("orders", "order history", "How many orders?");
        assert!(prompt.contains("- Table Name: orders"));
        assert!(prompt.contains(r#"- Question: "How many orders?""#));
        assert!(prompt.contains("- Description: order history"));
    }
}
