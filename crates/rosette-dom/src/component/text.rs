use crate::identity::{REACT_ID_ATTRIBUTE, ReactId};

/// Mounts a string or number leaf as a `<span>` carrying its identity path.
#[derive(Debug, Clone)]
pub struct TextComponent {
    current_element: String,
    root_node_id: Option<ReactId>,
    pub(crate) mount_index: Option<usize>,
}

impl TextComponent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            current_element: text.into(),
            root_node_id: None,
            mount_index: None,
        }
    }

    /// The stringified value this component renders.
    pub fn text(&self) -> &str {
        &self.current_element
    }

    pub fn root_node_id(&self) -> Option<&ReactId> {
        self.root_node_id.as_ref()
    }

    pub fn mount_component(&mut self, id: ReactId) -> String {
        tracing::trace!(%id, "mounting text component");
        let markup = format!(
            "<span {}=\"{}\">{}</span>",
            REACT_ID_ATTRIBUTE, id, self.current_element
        );
        self.root_node_id = Some(id);
        markup
    }
}
