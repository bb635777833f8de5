//! `convex`: a mock Convex database provider.
//!
//! Tools operate on canned data and echo what a real deployment would do;
//! nothing is persisted between calls.

use pool_protocol::{ResourceContent, ResourceDescriptor, ToolCallResult, ToolDescriptor};
use serde_json::{json, Map, Value};

use crate::catalog::Catalog;
use crate::traits::{Provider, ProviderError, ProviderResult};
use crate::util::{now_millis, now_rfc3339, pretty, str_arg};

const DEFAULT_QUERY_LIMIT: u64 = 10;

pub struct ConvexProvider {
    catalog: Catalog,
}

impl Default for ConvexProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvexProvider {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(tools(), resources()),
        }
    }

    fn create_table(&self, args: &Map<String, Value>) -> ToolCallResult {
        let name = str_arg(args, "name");
        let result = json!({
            "success": true,
            "table": name,
            "schema": args.get("schema").cloned().unwrap_or_else(|| json!({})),
            "created_at": now_rfc3339(),
            "message": format!("Table '{name}' created successfully"),
        });
        ToolCallResult::text(format!(
            "Table '{name}' created successfully!\n\n{}",
            pretty(&result)
        ))
    }

    fn insert_document(&self, args: &Map<String, Value>) -> ToolCallResult {
        let table = str_arg(args, "table");
        let result = json!({
            "success": true,
            "table": table,
            "document_id": format!("doc_{}", now_millis()),
            "document": args.get("document").cloned().unwrap_or(Value::Null),
            "inserted_at": now_rfc3339(),
        });
        ToolCallResult::text(format!(
            "Document inserted into '{table}'!\n\n{}",
            pretty(&result)
        ))
    }

    fn query_documents(&self, args: &Map<String, Value>) -> ProviderResult<ToolCallResult> {
        let table = str_arg(args, "table");
        let limit = match args.get("limit") {
            None | Some(Value::Null) => DEFAULT_QUERY_LIMIT,
            Some(v) => v.as_u64().ok_or_else(|| {
                ProviderError::Execution(format!("limit must be a non-negative integer, got {v}"))
            })?,
        };
        let filter = args.get("filter").and_then(Value::as_object);

        let docs: Vec<Value> = mock_documents(table)
            .into_iter()
            .filter(|doc| filter.map_or(true, |f| matches_filter(doc, f)))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect();

        let count = docs.len();
        Ok(ToolCallResult::text(format!(
            "Query results from '{table}' ({count} documents):\n\n{}",
            pretty(&Value::Array(docs))
        )))
    }

    fn update_document(&self, args: &Map<String, Value>) -> ToolCallResult {
        let table = str_arg(args, "table");
        let id = str_arg(args, "id");
        let result = json!({
            "success": true,
            "table": table,
            "document_id": id,
            "updates": args.get("updates").cloned().unwrap_or(Value::Null),
            "updated_at": now_rfc3339(),
        });
        ToolCallResult::text(format!(
            "Document '{id}' updated in '{table}'!\n\n{}",
            pretty(&result)
        ))
    }

    fn delete_document(&self, args: &Map<String, Value>) -> ToolCallResult {
        let table = str_arg(args, "table");
        let id = str_arg(args, "id");
        let result = json!({
            "success": true,
            "table": table,
            "document_id": id,
            "deleted_at": now_rfc3339(),
        });
        ToolCallResult::text(format!(
            "Document '{id}' deleted from '{table}'!\n\n{}",
            pretty(&result)
        ))
    }
}

#[async_trait::async_trait]
impl Provider for ConvexProvider {
    async fn list_tools(&self) -> ProviderResult<Vec<ToolDescriptor>> {
        Ok(self.catalog.tools().to_vec())
    }

    async fn list_resources(&self) -> ProviderResult<Vec<ResourceDescriptor>> {
        Ok(self.catalog.resources().to_vec())
    }

    async fn read_resource(&self, uri: &str) -> ProviderResult<Vec<ResourceContent>> {
        let resource = self.catalog.resource(uri)?;
        let body = match resource.uri.as_str() {
            "convex://tables" => json!({
                "tables": ["users", "messages", "documents", "sessions"],
                "timestamp": now_rfc3339(),
            }),
            "convex://schema" => json!({
                "schema": {
                    "users": {
                        "fields": ["name", "email", "createdAt"],
                        "indexes": ["email"],
                    },
                    "messages": {
                        "fields": ["content", "userId", "timestamp"],
                        "indexes": ["userId", "timestamp"],
                    },
                    "documents": {
                        "fields": ["title", "content", "tags", "createdAt"],
                        "indexes": ["tags", "createdAt"],
                    },
                },
                "timestamp": now_rfc3339(),
            }),
            "convex://functions" => json!({
                "functions": {
                    "queries": ["getUsers", "getMessages", "getDocuments"],
                    "mutations": ["createUser", "sendMessage", "updateDocument"],
                    "actions": ["sendEmail", "processDocument"],
                },
                "timestamp": now_rfc3339(),
            }),
            other => {
                return Err(ProviderError::Internal(format!(
                    "resource '{other}' is listed but has no content"
                )))
            }
        };
        Ok(vec![ResourceContent::json(uri, &body)])
    }

    async fn call_tool(&self, name: &str, arguments: Value) -> ProviderResult<ToolCallResult> {
        let args = self.catalog.prepare_call(name, arguments)?;
        tracing::debug!(tool = %name, "convex tool call");

        match name {
            "create_table" => Ok(self.create_table(&args)),
            "insert_document" => Ok(self.insert_document(&args)),
            "query_documents" => self.query_documents(&args),
            "update_document" => Ok(self.update_document(&args)),
            "delete_document" => Ok(self.delete_document(&args)),
            other => Err(ProviderError::Internal(format!(
                "tool '{other}' is listed but has no handler"
            ))),
        }
    }
}

/// Top-level equality match on every filter key.
fn matches_filter(doc: &Value, filter: &Map<String, Value>) -> bool {
    filter.iter().all(|(k, v)| doc.get(k) == Some(v))
}

fn mock_documents(table: &str) -> Vec<Value> {
    match table {
        "users" => vec![
            json!({ "_id": "user_1", "name": "John Doe", "email": "john@example.com", "createdAt": "2024-01-01T00:00:00Z" }),
            json!({ "_id": "user_2", "name": "Jane Smith", "email": "jane@example.com", "createdAt": "2024-01-02T00:00:00Z" }),
        ],
        "messages" => vec![
            json!({ "_id": "msg_1", "content": "Hello World!", "userId": "user_1", "timestamp": "2024-01-01T10:00:00Z" }),
            json!({ "_id": "msg_2", "content": "How are you?", "userId": "user_2", "timestamp": "2024-01-01T10:05:00Z" }),
        ],
        "documents" => vec![
            json!({ "_id": "doc_1", "title": "Welcome Guide", "content": "Getting started...", "tags": ["guide"], "createdAt": "2024-01-01T00:00:00Z" }),
        ],
        _ => Vec::new(),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Catalog
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "create_table",
            "Create a new table in Convex database",
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Name of the table to create" },
                    "schema": { "type": "object", "description": "Schema definition for the table" },
                },
                "required": ["name"],
            }),
        ),
        ToolDescriptor::new(
            "insert_document",
            "Insert a document into a Convex table",
            json!({
                "type": "object",
                "properties": {
                    "table": { "type": "string", "description": "Table name to insert into" },
                    "document": { "type": "object", "description": "Document data to insert" },
                },
                "required": ["table", "document"],
            }),
        ),
        ToolDescriptor::new(
            "query_documents",
            "Query documents from a Convex table",
            json!({
                "type": "object",
                "properties": {
                    "table": { "type": "string", "description": "Table name to query from" },
                    "filter": { "type": "object", "description": "Filter criteria for the query" },
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of documents to return",
                        "default": DEFAULT_QUERY_LIMIT,
                    },
                },
                "required": ["table"],
            }),
        ),
        ToolDescriptor::new(
            "update_document",
            "Update a document in a Convex table",
            json!({
                "type": "object",
                "properties": {
                    "table": { "type": "string", "description": "Table name containing the document" },
                    "id": { "type": "string", "description": "Document ID to update" },
                    "updates": { "type": "object", "description": "Fields to update" },
                },
                "required": ["table", "id", "updates"],
            }),
        ),
        ToolDescriptor::new(
            "delete_document",
            "Delete a document from a Convex table",
            json!({
                "type": "object",
                "properties": {
                    "table": { "type": "string", "description": "Table name containing the document" },
                    "id": { "type": "string", "description": "Document ID to delete" },
                },
                "required": ["table", "id"],
            }),
        ),
    ]
}

fn resources() -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor::new(
            "convex://tables",
            "Database Tables",
            "List of all tables in the Convex database",
            "application/json",
        ),
        ResourceDescriptor::new(
            "convex://schema",
            "Database Schema",
            "Complete schema definition of the database",
            "application/json",
        ),
        ResourceDescriptor::new(
            "convex://functions",
            "Convex Functions",
            "List of available Convex functions",
            "application/json",
        ),
    ]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::result_text;

    #[tokio::test]
    async fn lists_five_tools_and_three_resources() {
        let p = ConvexProvider::new();
        let tools = p.list_tools().await.unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["create_table", "insert_document", "query_documents", "update_document", "delete_document"]
        );
        assert_eq!(p.list_resources().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn create_table_mentions_table_name() {
        let p = ConvexProvider::new();
        let result = p
            .call_tool("create_table", json!({ "name": "users" }))
            .await
            .unwrap();
        assert!(!result.is_error);
        assert!(result_text(&result).contains("Table 'users' created successfully"));
    }

    #[tokio::test]
    async fn create_table_without_name_is_invalid() {
        let p = ConvexProvider::new();
        let err = p.call_tool("create_table", json!({})).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn unknown_tool() {
        let p = ConvexProvider::new();
        let err = p.call_tool("drop_database", json!({})).await.unwrap_err();
        assert_eq!(err, ProviderError::ToolNotFound("drop_database".into()));
    }

    #[tokio::test]
    async fn query_respects_limit_and_filter() {
        let p = ConvexProvider::new();
        let limited = p
            .call_tool("query_documents", json!({ "table": "users", "limit": 1 }))
            .await
            .unwrap();
        assert!(result_text(&limited).contains("(1 documents)"));

        let filtered = p
            .call_tool(
                "query_documents",
                json!({ "table": "messages", "filter": { "userId": "user_2" } }),
            )
            .await
            .unwrap();
        let text = result_text(&filtered);
        assert!(text.contains("(1 documents)"));
        assert!(text.contains("msg_2"));
    }

    #[tokio::test]
    async fn fractional_limit_is_an_execution_error() {
        let p = ConvexProvider::new();
        let err = p
            .call_tool("query_documents", json!({ "table": "users", "limit": 1.5 }))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Execution(_)));
    }

    #[tokio::test]
    async fn query_unknown_table_is_empty() {
        let p = ConvexProvider::new();
        let result = p
            .call_tool("query_documents", json!({ "table": "nope" }))
            .await
            .unwrap();
        assert!(result_text(&result).contains("(0 documents)"));
    }

    #[tokio::test]
    async fn read_tables_resource() {
        let p = ConvexProvider::new();
        let contents = p.read_resource("convex://tables").await.unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].uri, "convex://tables");
        let body: Value = serde_json::from_str(&contents[0].text).unwrap();
        assert_eq!(body["tables"][0], "users");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn every_listed_resource_is_readable() {
        let p = ConvexProvider::new();
        for res in p.list_resources().await.unwrap() {
            assert!(p.read_resource(&res.uri).await.is_ok(), "{}", res.uri);
        }
    }

    #[tokio::test]
    async fn unknown_resource() {
        let p = ConvexProvider::new();
        let err = p.read_resource("convex://indexes").await.unwrap_err();
        assert_eq!(err.to_string(), "Resource not found: convex://indexes");
    }
}
