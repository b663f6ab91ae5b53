//! Validation of raw shell arguments before they reach the ledger.

use crate::{
    errors::InputError,
    ledger::{EntryId, EntryKind},
};

/// A validated request to record an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInput {
    pub kind: EntryKind,
    pub description: String,
    pub value: f64,
}

/// Validates the raw type, description, and amount fields.
///
/// The description is trimmed and must be non-empty; the amount must be a
/// finite number greater than zero.
pub fn parse_item_input(kind: &str, description: &str, value: &str) -> Result<ItemInput, InputError> {
    let kind = kind.parse::<EntryKind>()?;
    let description = description.trim();
    if description.is_empty() {
        return Err(InputError::EmptyDescription);
    }
    let value = parse_value(value)?;
    Ok(ItemInput {
        kind,
        description: description.to_string(),
        value,
    })
}

fn parse_value(raw: &str) -> Result<f64, InputError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InputError::InvalidValue(raw.to_string()))?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NonPositiveValue(value))
    }
}

/// Parses an item reference given either as `expense-3` or as `expense 3`.
pub fn parse_item_ref(args: &[&str]) -> Result<(EntryKind, EntryId), InputError> {
    match args {
        [single] => {
            let (kind, id) = single
                .rsplit_once('-')
                .ok_or_else(|| InputError::MalformedItemId(single.to_string()))?;
            Ok((kind.parse()?, parse_id(single, id)?))
        }
        [kind, id] => Ok((kind.parse()?, parse_id(id, id)?)),
        _ => Err(InputError::MalformedItemId(args.join(" "))),
    }
}

fn parse_id(raw: &str, id: &str) -> Result<EntryId, InputError> {
    id.trim()
        .parse::<EntryId>()
        .map_err(|_| InputError::MalformedItemId(raw.to_string()))
}
