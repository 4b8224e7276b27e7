use crate::entity::Entity;
use serde::{Deserialize, Serialize};

/// Inbound request envelope. Field shapes follow the agentlake wire format;
/// everything the caller may omit is optional here so the handler decides
/// the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub header: RequestHeader,
    #[serde(default)]
    pub body: RequestBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestHeader {
    #[serde(default)]
    pub apc_id: Option<String>,
    #[serde(default)]
    pub server_agent_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Outbound response envelope, mirroring the request header fields plus the
/// fixed status/version constants of the agentlake format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub header: ResponseHeader,
    pub body: ResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
    pub apc_id: Option<String>,
    pub auth_token: String,
    pub client_agent_uuid: String,
    pub message: String,
    pub server_agent_uuid: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseBody {
    pub entities: ResponseEntities,
    pub intent: String,
    pub metadata: ResponseMetadata,
    pub query: String,
    pub response: String,
    pub status: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEntities {
    pub query_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub context: String,
}

impl ResponseEnvelope {
    /// Assemble the uniform success envelope both handler paths return.
    /// `auth_token` is emitted but never verified anywhere.
    pub fn success(
        header: &RequestHeader,
        intent: &str,
        query: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        let query = query.into();
        ResponseEnvelope {
            header: ResponseHeader {
                content_type: "application/json".to_string(),
                apc_id: header.apc_id.clone(),
                auth_token: "dummy".to_string(),
                client_agent_uuid: "client_agent_uuid".to_string(),
                message: "response".to_string(),
                server_agent_uuid: header.server_agent_uuid.clone(),
                version: "1.0".to_string(),
            },
            body: ResponseBody {
                entities: ResponseEntities {
                    query_text: query.clone(),
                },
                intent: intent.to_string(),
                metadata: ResponseMetadata {
                    context: "query generated from a seller who is selling".to_string(),
                },
                query,
                response: response.into(),
                status: 200,
            },
        }
    }
}
