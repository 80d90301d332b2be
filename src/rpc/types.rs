use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request envelope sent to the fullnode.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'a str,
    pub id: u32,
    pub method: &'a str,
    pub params: Value,
}

/// JSON-RPC 2.0 response envelope. Exactly one of `result`/`error` is
/// expected; a response carrying neither is treated as a null result.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

/// Read-only snapshot of one on-chain object, as returned by the node.
/// Identity is `object_id`; `content` keeps the node's loosely typed
/// key-value shape for the parser to pick apart.
#[derive(Debug, Clone, PartialEq)]
pub struct OnChainObject {
    pub object_id: String,
    pub type_tag: String,
    pub content: Value,
}

impl OnChainObject {
    /// Reads one object payload (`{ objectId, type, content }`). An entry
    /// without an id is unusable and dropped; a missing type or content
    /// degrades to empty placeholders.
    pub fn from_object_data(data: &Value) -> Option<Self> {
        let object_id = data.get("objectId")?.as_str()?.to_string();
        let type_tag = data
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let content = data.get("content").cloned().unwrap_or(Value::Null);
        Some(Self {
            object_id,
            type_tag,
            content,
        })
    }
}

/// Flattens a `sui_getOwnedObjects` page into object snapshots. Each page
/// entry wraps its payload in a `data` envelope.
pub fn parse_owned_objects(result: &Value) -> Vec<OnChainObject> {
    result["data"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or(&[])
        .iter()
        .filter_map(|entry| OnChainObject::from_object_data(&entry["data"]))
        .collect()
}

/// Reads a `sui_getObject` result (same `data` envelope, single object).
pub fn parse_object(result: &Value) -> Option<OnChainObject> {
    OnChainObject::from_object_data(&result["data"])
}

/// Balances arrive in MIST (1 SUI = 10^9 MIST), usually as a decimal string.
pub fn mist_to_sui(result: &Value) -> f64 {
    let mist = match &result["totalBalance"] {
        Value::String(s) => s.parse::<f64>().unwrap_or(0.0),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    };
    mist / 1_000_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_owned_objects_page() {
        let result = json!({
            "data": [
                { "data": { "objectId": "0x1", "type": "0xp::m::T", "content": { "fields": {} } } },
                { "data": { "type": "0xp::m::T" } },
                { "unexpected": true },
            ]
        });

        let objects = parse_owned_objects(&result);
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].object_id, "0x1");
        assert_eq!(objects[0].type_tag, "0xp::m::T");
    }

    #[test]
    fn test_parse_owned_objects_tolerates_missing_page() {
        assert!(parse_owned_objects(&json!({})).is_empty());
        assert!(parse_owned_objects(&json!(null)).is_empty());
    }

    #[test]
    fn test_parse_object_missing_type_defaults_empty() {
        let result = json!({ "data": { "objectId": "0x2" } });
        let object = parse_object(&result).unwrap();
        assert_eq!(object.type_tag, "");
        assert!(object.content.is_null());
    }

    #[test]
    fn test_mist_to_sui_conversion() {
        assert_eq!(mist_to_sui(&json!({ "totalBalance": "2500000000" })), 2.5);
        assert_eq!(mist_to_sui(&json!({ "totalBalance": 1_000_000_000u64 })), 1.0);
        assert_eq!(mist_to_sui(&json!({})), 0.0);
    }
}
