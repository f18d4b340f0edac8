//! Cache keys for loaded entity data.
//!
//! A data key identifies the shape of one load call. It is the property (or
//! the entity id when the property is empty), followed by `:` and the
//! encoded conditions when there are any:
//!
//! | property      | conditions           | entity id | key                        |
//! |---------------|----------------------|-----------|----------------------------|
//! | `""`          | none                 | `123`     | `123`                      |
//! | `"attendees"` | none                 | `123`     | `attendees`                |
//! | `"attendees"` | `status=attending`   | `123`     | `attendees:status=attending` |
//!
//! The property and the conditions are both percent-encoded, so the only
//! `:` in a key is the separator.

use std::collections::BTreeMap;

use crate::clients::{decode_pairs, encode_pairs};
use crate::entity::EntityError;

/// Query parameters of a load call.
pub type Conditions = BTreeMap<String, String>;

/// Separator between property and encoded conditions.
pub const DATA_KEY_SEPARATOR: char = ':';

/// Builds the data key for a load call.
#[must_use]
pub fn build_data_key(property: &str, conditions: &Conditions, entity_id: Option<&str>) -> String {
    let property = if property.is_empty() {
        entity_id.unwrap_or_default()
    } else {
        property
    };

    let property = urlencoding::encode(property);
    if conditions.is_empty() {
        property.into_owned()
    } else {
        format!("{property}{DATA_KEY_SEPARATOR}{}", encode_pairs(conditions))
    }
}

/// Splits a data key back into property and conditions.
///
/// A property equal to `entity_id` is returned as the empty string.
///
/// # Errors
///
/// Returns [`EntityError::MalformedKey`] if the key has more than one
/// separator, an empty condition part, or a condition without `=`.
pub fn parse_data_key(
    key: &str,
    entity_id: Option<&str>,
) -> Result<(String, Conditions), EntityError> {
    let malformed = || EntityError::MalformedKey {
        key: key.to_string(),
    };

    let (property, conditions) = match key.split_once(DATA_KEY_SEPARATOR) {
        None => (key, Conditions::new()),
        Some((_, query)) if query.is_empty() || query.contains(DATA_KEY_SEPARATOR) => {
            return Err(malformed());
        }
        Some((property, query)) => (property, decode_pairs(query).ok_or_else(malformed)?),
    };

    let property = urlencoding::decode(property).map_err(|_| malformed())?;
    if entity_id == Some(property.as_ref()) {
        return Ok((String::new(), conditions));
    }
    Ok((property.into_owned(), conditions))
}
