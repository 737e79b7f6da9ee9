//! The reference diagram provider.

use diagram_plugin_protocol::handler::{DiagramProvider, RenderError};
use diagram_plugin_protocol::{
    Availability, Change, Context, Diagram, DiagramData, DiagramDescriptor, Edge, Node,
};

/// Identifier of the only diagram type the reference plugin renders.
pub const EXAMPLE_DIAGRAM_ID: &str = "example";

/// Provider that always renders the same two-node graph.
///
/// It ignores the change and context entirely, which makes it useful for
/// checking a host's wiring end to end.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExampleProvider;

impl ExampleProvider {
    fn descriptor() -> DiagramDescriptor {
        DiagramDescriptor::new(EXAMPLE_DIAGRAM_ID).with_name("Example")
    }
}

impl DiagramProvider for ExampleProvider {
    fn availabilities(&self) -> Vec<Availability> {
        vec![Availability::available(Self::descriptor())]
    }

    fn render(
        &self,
        _change: Option<&Change>,
        _context: Option<&Context>,
    ) -> Result<Vec<Diagram>, RenderError> {
        let content = DiagramData::new(
            vec![Node::keyed("a"), Node::keyed("b")],
            vec![Edge::connecting("a->b", "a", "b")],
        );
        Ok(vec![Diagram::new(Self::descriptor(), content)])
    }
}
