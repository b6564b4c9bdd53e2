//! Selected document nodes and the checks run before a transfer.

use std::str::FromStr;

use crate::error::{ExtensionError, ExtensionResult};

/// Element kinds that must be converted to paths before cutting.
pub const UNSUPPORTED_KINDS: &[&str] = &["text"];

/// One node selected in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedNode {
    /// Node id in the document.
    pub id: String,
    /// Element tag, possibly namespaced (`{http://www.w3.org/2000/svg}text`).
    /// `None` when the host did not report it.
    pub tag: Option<String>,
}

impl SelectedNode {
    /// Create a node with a known tag.
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        SelectedNode {
            id: id.into(),
            tag: Some(tag.into()),
        }
    }

    /// Tag name without the `{namespace}` prefix.
    pub fn local_name(&self) -> Option<&str> {
        self.tag.as_deref().map(|tag| match tag.rfind('}') {
            Some(end) => &tag[end + 1..],
            None => tag,
        })
    }

    /// Whether the cutter application can handle this node as is.
    pub fn is_supported(&self) -> bool {
        match self.local_name() {
            Some(name) => !UNSUPPORTED_KINDS.contains(&name),
            None => true,
        }
    }
}

impl FromStr for SelectedNode {
    type Err = ExtensionError;

    /// Parse `ID=TAG` or a bare `ID`.
    fn from_str(s: &str) -> ExtensionResult<Self> {
        let (id, tag) = match s.split_once('=') {
            Some((id, tag)) => (id, Some(tag)),
            None => (s, None),
        };
        if id.is_empty() || tag.is_some_and(str::is_empty) {
            return Err(ExtensionError::InvalidNodeArg(s.to_string()));
        }
        Ok(SelectedNode {
            id: id.to_string(),
            tag: tag.map(str::to_string),
        })
    }
}

/// The nodes selected in the editor, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    nodes: Vec<SelectedNode>,
}

impl Selection {
    /// Create a selection from a list of nodes.
    pub fn new(nodes: Vec<SelectedNode>) -> Self {
        Selection { nodes }
    }

    /// Parse a selection from `ID=TAG` / `ID` arguments.
    pub fn parse<I, S>(args: I) -> ExtensionResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let nodes = args
            .into_iter()
            .map(|arg| arg.as_ref().parse())
            .collect::<ExtensionResult<Vec<_>>>()?;
        Ok(Selection { nodes })
    }

    /// Selected nodes.
    pub fn nodes(&self) -> &[SelectedNode] {
        &self.nodes
    }

    /// Ids of the selected nodes, in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.id.as_str())
    }

    /// Number of selected nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check that the selection can be sent.
    ///
    /// Fails on an empty selection, or on the first node whose kind the
    /// cutter application cannot process.
    pub fn validate(&self) -> ExtensionResult<()> {
        if self.nodes.is_empty() {
            return Err(ExtensionError::EmptySelection);
        }
        if let Some(node) = self.nodes.iter().find(|node| !node.is_supported()) {
            return Err(ExtensionError::UnsupportedContent {
                id: node.id.clone(),
                kind: node.local_name().unwrap_or_default().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name_strips_namespace() {
        let node = SelectedNode::new("t1", "{http://www.w3.org/2000/svg}text");
        assert_eq!(node.local_name(), Some("text"));
        assert!(!node.is_supported());

        let node = SelectedNode::new("p1", "path");
        assert_eq!(node.local_name(), Some("path"));
        assert!(node.is_supported());
    }

    #[test]
    fn test_parse_node_args() {
        let selection = Selection::parse(["path1=path", "rect2"]).unwrap();
        assert_eq!(
            selection.nodes(),
            &[
                SelectedNode::new("path1", "path"),
                SelectedNode { id: "rect2".to_string(), tag: None },
            ]
        );
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec!["path1", "rect2"]);
    }

    #[test]
    fn test_parse_rejects_empty_parts() {
        assert!(matches!(
            "=path".parse::<SelectedNode>(),
            Err(ExtensionError::InvalidNodeArg(_))
        ));
        assert!(matches!(
            "path1=".parse::<SelectedNode>(),
            Err(ExtensionError::InvalidNodeArg(_))
        ));
    }

    #[test]
    fn test_validate_empty() {
        assert!(matches!(
            Selection::default().validate(),
            Err(ExtensionError::EmptySelection)
        ));
    }

    #[test]
    fn test_validate_text_node() {
        let selection = Selection::new(vec![
            SelectedNode::new("path1", "path"),
            SelectedNode::new("text3", "{http://www.w3.org/2000/svg}text"),
        ]);
        match selection.validate() {
            Err(ExtensionError::UnsupportedContent { id, kind }) => {
                assert_eq!(id, "text3");
                assert_eq!(kind, "text");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_ok() {
        let selection = Selection::parse(["path1=path", "g4=g", "unknown5"]).unwrap();
        assert!(selection.validate().is_ok());
    }
}
