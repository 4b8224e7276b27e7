use crate::db::StatementExecutor;
use crate::error::ApiError;
use crate::{prompt, schema};
use actix_web::{post, web, HttpResponse};
use text2sql_llm::{ChatRequest, CompletionClient, Message};
use text2sql_types::{
    Intent, RequestEnvelope, RequestHeader, ResponseEnvelope, TableDetails, DEFAULT_QUERY,
};
use tracing::{debug, error};

/// The one route this service exposes. Dispatches on the pre-classified
/// intent label; anything outside the closed set is answered with an
/// explicit 400 instead of falling through silently.
#[post("/cartesin-api.plotch.io/agentlake/agent/text2sql/query")]
pub async fn query(
    envelope: web::Json<RequestEnvelope>,
    executor: web::Data<dyn StatementExecutor>,
    completion: web::Data<dyn CompletionClient>,
) -> Result<HttpResponse, ApiError> {
    let RequestEnvelope { header, body } = envelope.into_inner();

    let query_text = body
        .query
        .clone()
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());
    let intent_label = body.intent.clone().unwrap_or_default();
    let intent = Intent::parse(&intent_label)
        .ok_or_else(|| ApiError::UnrecognizedIntent(intent_label.clone()))?;
    let details = TableDetails::from_entities(&body.entities);

    match intent {
        Intent::MysqlCreateTable => {
            create_table(&header, intent, &query_text, details, executor.get_ref()).await
        }
        Intent::MysqlQueryCreate => {
            generate_query(&header, intent, &query_text, details, completion.get_ref()).await
        }
    }
}

/// DDL path: synthesize a `CREATE TABLE IF NOT EXISTS` statement from the
/// supplied (or defaulted) column mapping and run it against MySQL.
async fn create_table(
    header: &RequestHeader,
    intent: Intent,
    query_text: &str,
    details: TableDetails,
    executor: &dyn StatementExecutor,
) -> Result<HttpResponse, ApiError> {
    let table_name = details
        .table_name
        .unwrap_or_else(|| "default_table".to_string());
    let table_schema = details
        .table_schema
        .unwrap_or_else(schema::default_table_schema);
    debug!("table_schema: {:?}", table_schema);

    let create_table_query = schema::build_create_table(&table_name, &table_schema)?;
    executor.execute(&create_table_query).await?;
    debug!("Table '{}' created successfully!", table_name);

    Ok(HttpResponse::Ok().json(ResponseEnvelope::success(
        header,
        intent.as_str(),
        query_text,
        format!("The {} table has been created", table_name),
    )))
}

/// LLM path: build the instruction prompt, call the completion service,
/// and extract the first `SELECT ... ;` span from its answer.
async fn generate_query(
    header: &RequestHeader,
    intent: Intent,
    query_text: &str,
    details: TableDetails,
    completion: &dyn CompletionClient,
) -> Result<HttpResponse, ApiError> {
    let table_name = details
        .table_name
        .unwrap_or_else(|| prompt::UNKNOWN_TABLE.to_string());
    let table_description = details
        .table_description
        .unwrap_or_else(|| prompt::NO_DESCRIPTION.to_string());

    let system_prompt = prompt::build_prompt(&table_name, &table_description, query_text);
    let request = ChatRequest::new(vec![
        Message::system(system_prompt),
        Message::user(query_text),
    ]);

    let chat_response = completion.chat_complete(request).await.map_err(|e| {
        error!("Error generating query: {}", e);
        ApiError::Upstream {
            details: e.to_string(),
        }
    })?;

    let sql_query = prompt::extract_sql(&chat_response.answer);
    debug!("Generated SQL Query: {}", sql_query);

    Ok(HttpResponse::Ok().json(ResponseEnvelope::success(
        header,
        intent.as_str(),
        query_text,
        sql_query,
    )))
}
