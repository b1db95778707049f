use serde_json::Value;

/// The untyped tree decoded from the embedded form data.
pub type RawNode = Value;

/// Guarded, index-or-none access into a [`RawNode`].
///
/// The form layout is undocumented, so every positional read goes through these
/// helpers instead of assuming a fixed arity.
pub trait NodeExt {
    /// The `index`-th element, if this node is an array long enough to have one.
    fn at(&self, index: usize) -> Option<&RawNode>;

    /// Follows a sequence of array indices. Returns `None` at the first miss.
    fn path(&self, indices: &[usize]) -> Option<&RawNode>;

    /// The array length, or `None` when this node is not an array.
    fn arity(&self) -> Option<usize>;

    /// A non-empty string value.
    fn as_text(&self) -> Option<&str>;

    /// A display label: strings as-is, numbers rendered in decimal.
    fn as_label(&self) -> Option<String>;

    /// Loose truthiness: `null`, `false`, `0`, `""` and `[]` are false.
    fn is_truthy(&self) -> bool;
}

impl NodeExt for RawNode {
    fn at(&self, index: usize) -> Option<&RawNode> {
        self.as_array().and_then(|items| items.get(index))
    }

    fn path(&self, indices: &[usize]) -> Option<&RawNode> {
        indices
            .iter()
            .try_fold(self, |node, &index| node.at(index))
    }

    fn arity(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str().filter(|s| !s.is_empty())
    }

    fn as_label(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_stops_at_first_missing_index() {
        let node = json!([null, [1, [2, 3]]]);
        assert_eq!(node.path(&[1, 1, 0]), Some(&json!(2)));
        assert_eq!(node.path(&[1, 5, 0]), None);
        assert_eq!(node.path(&[0, 0]), None);
        assert_eq!(node.path(&[]), Some(&node));
    }

    #[test]
    fn truthiness_follows_loose_rules() {
        assert!(!json!(null).is_truthy());
        assert!(!json!(0).is_truthy());
        assert!(!json!("").is_truthy());
        assert!(!json!([]).is_truthy());
        assert!(json!(1).is_truthy());
        assert!(json!(true).is_truthy());
        assert!(json!("x").is_truthy());
    }

    #[test]
    fn labels_render_numbers() {
        assert_eq!(json!(444).as_label(), Some("444".to_string()));
        assert_eq!(json!("Email").as_label(), Some("Email".to_string()));
        assert_eq!(json!(null).as_label(), None);
    }
}
