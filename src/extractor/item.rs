use crate::schema::{Question, QuestionKind};
use crate::source::{NodeExt, RawNode};
use ahash::AHashMap;

// Positions inside one form item: `[?, title, description?, type_code, entry_block?, ...]`.
const TITLE: usize = 1;
const DESCRIPTION: usize = 2;
const TYPE_CODE: usize = 3;
const ENTRY_BLOCK: usize = 4;

// Positions inside `entry_block[0]`: `[entry_id, options, required_flag, ...]`.
const ENTRY_ID: [usize; 3] = [ENTRY_BLOCK, 0, 0];
const ENTRY_OPTIONS: [usize; 3] = [ENTRY_BLOCK, 0, 1];
const ENTRY_REQUIRED: [usize; 3] = [ENTRY_BLOCK, 0, 2];

/// Items shorter than this cannot even carry a title.
const MIN_ITEM_ARITY: usize = 2;

/// What a single form item decoded into.
#[derive(Debug)]
pub(super) enum ItemOutcome {
    Question(Question),
    /// A well-formed item with no entry id: section headers, images, page breaks.
    NotSubmittable,
    Malformed(String),
}

/// Decodes one positional form item.
pub(super) fn parse_item(item: &RawNode, kinds: &AHashMap<u64, QuestionKind>) -> ItemOutcome {
    let arity = match item.arity() {
        Some(arity) => arity,
        None => return ItemOutcome::Malformed("item is not an array".to_string()),
    };
    if arity < MIN_ITEM_ARITY {
        return ItemOutcome::Malformed(format!(
            "item has {} element(s), expected at least {}",
            arity, MIN_ITEM_ARITY
        ));
    }

    if let Some(reason) = entry_block_shape_error(item) {
        return ItemOutcome::Malformed(reason);
    }

    let id = match item
        .path(&ENTRY_ID)
        .filter(|node| node.is_truthy())
        .and_then(NodeExt::as_label)
    {
        Some(id) => id,
        None => return ItemOutcome::NotSubmittable,
    };

    let kind = item
        .at(TYPE_CODE)
        .and_then(RawNode::as_u64)
        .and_then(|code| kinds.get(&code).copied())
        .unwrap_or(QuestionKind::Unknown);

    let options = if kind.is_choice() {
        parse_options(item)
    } else {
        Vec::new()
    };

    ItemOutcome::Question(Question {
        id,
        title: item
            .at(TITLE)
            .and_then(RawNode::as_str)
            .unwrap_or_default()
            .to_string(),
        description: item
            .at(DESCRIPTION)
            .and_then(NodeExt::as_text)
            .map(str::to_string),
        kind,
        options,
        required: item.path(&ENTRY_REQUIRED).is_some_and(NodeExt::is_truthy),
    })
}

/// An absent or `null` entry block is normal for headers and images. A block that is
/// present but not nested arrays is a layout we cannot read.
fn entry_block_shape_error(item: &RawNode) -> Option<String> {
    let block = item.at(ENTRY_BLOCK).filter(|block| !block.is_null())?;
    if block.arity().is_none() {
        return Some(format!("entry block is not an array: {}", block));
    }
    match block.at(0) {
        Some(entry) if entry.arity().is_none() => {
            Some(format!("entry block[0] is not an array: {}", entry))
        }
        _ => None,
    }
}

/// Each option is an array whose first element is its label. Empty labels mark the
/// free-text "other" slot and are left out.
fn parse_options(item: &RawNode) -> Vec<String> {
    item.path(&ENTRY_OPTIONS)
        .and_then(RawNode::as_array)
        .map(|raw_options| {
            raw_options
                .iter()
                .filter_map(|option| option.at(0).and_then(NodeExt::as_label))
                .filter(|label| !label.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::default_kinds;
    use serde_json::json;

    fn parse(item: RawNode) -> ItemOutcome {
        parse_item(&item, &default_kinds())
    }

    #[test]
    fn text_item_with_entry_id() {
        let outcome = parse(json!([333, "What is your email?", null, 0, [[444, null, 0]]]));
        match outcome {
            ItemOutcome::Question(q) => {
                assert_eq!(q.id, "444");
                assert_eq!(q.title, "What is your email?");
                assert_eq!(q.kind, QuestionKind::ShortText);
                assert!(q.options.is_empty());
                assert!(!q.required);
                assert_eq!(q.description, None);
            }
            other => panic!("Expected a question, got {:?}", other),
        }
    }

    #[test]
    fn required_flag_and_description() {
        let outcome = parse(json!([1, "Bio", "Tell us about you", 1, [[77, null, 1]]]));
        match outcome {
            ItemOutcome::Question(q) => {
                assert!(q.required);
                assert_eq!(q.kind, QuestionKind::LongText);
                assert_eq!(q.description.as_deref(), Some("Tell us about you"));
            }
            other => panic!("Expected a question, got {:?}", other),
        }
    }

    #[test]
    fn zero_entry_id_is_not_submittable() {
        assert!(matches!(
            parse(json!([1, "Header", null, 8, [[0, null, 0]]])),
            ItemOutcome::NotSubmittable
        ));
    }

    #[test]
    fn short_and_non_array_items_are_malformed() {
        assert!(matches!(parse(json!([1])), ItemOutcome::Malformed(_)));
        assert!(matches!(parse(json!("oops")), ItemOutcome::Malformed(_)));
    }

    #[test]
    fn options_skip_empty_and_non_string_labels() {
        let outcome = parse(json!([
            5,
            "Pick",
            null,
            3,
            [[9, [["A"], [""], [null], [], ["B", null, null, null]], 0]]
        ]));
        match outcome {
            ItemOutcome::Question(q) => assert_eq!(q.options, vec!["A", "B"]),
            other => panic!("Expected a question, got {:?}", other),
        }
    }
}
