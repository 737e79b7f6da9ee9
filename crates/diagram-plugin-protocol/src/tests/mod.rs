//! Crate-level integration and BDD tests.

use crate::codec::{decode_request, encode_response};
use crate::handler::{DiagramProvider, RenderError, dispatch};
use crate::model::{
    Availability, Change, Context, Diagram, DiagramData, DiagramDescriptor, Edge, Node,
};


/// Provider with one available and one unavailable diagram type.
struct StubProvider;

impl DiagramProvider for StubProvider {
    fn availabilities(&self) -> Vec<Availability> {
        vec![
            Availability::available(DiagramDescriptor::new("integration").with_name("Integration")),
            Availability::unavailable(DiagramDescriptor::new("sequence"), "no endpoints"),
        ]
    }

    fn render(
        &self,
        _change: Option<&Change>,
        _context: Option<&Context>,
    ) -> Result<Vec<Diagram>, RenderError> {
        Ok(vec![Diagram::new(
            DiagramDescriptor::new("integration"),
            DiagramData::new(
                vec![Node::keyed("client"), Node::keyed("server")],
                vec![Edge::connecting("client->server", "client", "server")],
            ),
        )])
    }
}

fn exchange(input: &[u8]) -> serde_json::Value {
    let envelope = decode_request(input).expect("decode request");
    let response = dispatch(&StubProvider, envelope);
    let bytes = encode_response(&response).expect("encode response");
    serde_json::from_slice(&bytes).expect("response is JSON")
}

#[test]
fn end_to_end_initialize_exchange() {
    let response = exchange(br#"{"initialize":{"capabilities":{"x":1}}}"#);
    assert_eq!(
        response,
        serde_json::json!({
            "initialize": {
                "capabilities": {
                    "diagrams": {
                        "availabilities": [
                            {"type": {"id": "integration", "name": "Integration"}, "available": true},
                            {"type": {"id": "sequence"}, "available": false, "reason": "no endpoints"}
                        ]
                    }
                }
            }
        })
    );
}

#[test]
fn end_to_end_onchange_exchange() {
    let response = exchange(
        br#"{"onchange":{"change":{"action":"MODIFY","source":"TEXT","filePath":"a.sysl"}}}"#,
    );
    assert_eq!(
        response,
        serde_json::json!({
            "onchange": {
                "renderDiagram": [{
                    "type": {"id": "integration"},
                    "content": {
                        "nodes": [{"key": "client"}, {"key": "server"}],
                        "edges": [{"key": "client->server", "from": "client", "to": "server"}]
                    }
                }]
            }
        })
    );
}

#[test]
fn end_to_end_empty_request_exchange() {
    let response = exchange(b"{}");
    assert_eq!(
        response,
        serde_json::json!({"error": {"message": "unknown request type"}})
    );
}
