use serde_json::{Map, Value};

/// Merge two JSON objects recursively, `b` acting as the patch.
///
/// Keys found in both sides as objects are merged key by key; any other
/// conflict takes `b`'s value, including an explicit null. Keys present in
/// only one side are kept as-is.
pub fn soft_update(a: &Map<String, Value>, b: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = a.clone();
    for (key, patch) in b {
        let value = match (a.get(key), patch) {
            (Some(Value::Object(left)), Value::Object(right)) => {
                Value::Object(soft_update(left, right))
            }
            _ => patch.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

/// Fold any number of JSON objects with [`soft_update`], left to right.
///
/// Later objects patch earlier ones, so the last writer wins for scalar
/// conflicts.
pub fn soft_updates<I>(maps: I) -> Map<String, Value>
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    maps.into_iter()
        .fold(Map::new(), |merged, map| soft_update(&merged, &map))
}

/// Collapse labeled candidate values into a sparse options object.
///
/// An entry is dropped when its value is empty: null, `""`, `[]`, `{}`,
/// numeric zero or `false`. A surviving object value is cleaned of null
/// sub-entries recursively; objects emptied by that cleaning are kept.
pub fn compact_options<'a, I>(entries: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    let mut options = Map::new();
    for (key, value) in entries {
        if is_empty(&value) {
            continue;
        }
        options.insert(key.to_string(), drop_nulls(value));
    }
    options
}

/// Insert `key` into `base` only when `value` is not empty, under the same
/// rule as [`compact_options`].
pub fn add_not_empty(base: &mut Map<String, Value>, key: &str, value: Value) {
    if !is_empty(&value) {
        base.insert(key.to_string(), value);
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn drop_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let cleaned = map
                .into_iter()
                .filter(|(_, entry)| !entry.is_null())
                .map(|(key, entry)| (key, drop_nulls(entry)))
                .collect();
            Value::Object(cleaned)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object literal"),
        }
    }

    #[test]
    fn soft_update_merges_nested_objects() {
        let a = obj(json!({ "options": { "a": 1, "b": 2 } }));
        let b = obj(json!({ "options": { "b": 3, "c": 4 } }));
        let merged = soft_update(&a, &b);
        assert_eq!(
            Value::Object(merged),
            json!({ "options": { "a": 1, "b": 3, "c": 4 } })
        );
    }

    #[test]
    fn soft_update_takes_patch_value_on_conflict() {
        let a = obj(json!({ "a": 1, "b": { "x": 1 }, "c": "kept" }));
        let b = obj(json!({ "a": null, "b": "scalar" }));
        let merged = soft_update(&a, &b);
        assert_eq!(
            Value::Object(merged),
            json!({ "a": null, "b": "scalar", "c": "kept" })
        );
    }

    #[test]
    fn soft_update_keeps_keys_missing_from_patch() {
        let a = obj(json!({ "left": 1 }));
        let b = obj(json!({ "right": 2 }));
        let merged = soft_update(&a, &b);
        assert_eq!(Value::Object(merged), json!({ "left": 1, "right": 2 }));
    }

    #[test]
    fn soft_updates_applies_left_to_right() {
        let maps = vec![
            obj(json!({ "a": 1, "nested": { "x": 1 } })),
            obj(json!({ "a": 2, "nested": { "y": 2 } })),
            obj(json!({ "a": 3 })),
        ];
        let merged = soft_updates(maps);
        assert_eq!(
            Value::Object(merged),
            json!({ "a": 3, "nested": { "x": 1, "y": 2 } })
        );
    }

    #[test]
    fn soft_updates_of_nothing_is_empty() {
        let merged = soft_updates(Vec::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn compact_options_drops_empty_values() {
        let options = compact_options([
            ("a", json!(null)),
            ("b", json!(0)),
            ("c", json!("")),
            ("d", json!([])),
            ("e", json!({})),
            ("f", json!(false)),
            ("g", json!("x")),
            ("h", json!(1)),
        ]);
        assert_eq!(Value::Object(options), json!({ "g": "x", "h": 1 }));
    }

    #[test]
    fn compact_options_drops_float_zero() {
        let options = compact_options([("opacity", json!(0.0)), ("weight", json!(0.5))]);
        assert_eq!(Value::Object(options), json!({ "weight": 0.5 }));
    }

    #[test]
    fn compact_options_cleans_nested_nulls_only() {
        let options = compact_options([(
            "opts",
            json!({ "a": null, "b": "", "c": { "d": null, "e": 1 } }),
        )]);
        // empty strings survive below the top level, nulls never do
        assert_eq!(
            Value::Object(options),
            json!({ "opts": { "b": "", "c": { "e": 1 } } })
        );
    }

    #[test]
    fn compact_options_keeps_objects_emptied_by_cleaning() {
        let options = compact_options([("kept", json!({ "a": null })), ("dropped", json!({}))]);
        assert_eq!(Value::Object(options), json!({ "kept": {} }));
    }

    #[test]
    fn add_not_empty_skips_empty_values() {
        let mut base = Map::new();
        add_not_empty(&mut base, "text", json!(""));
        add_not_empty(&mut base, "count", json!(0));
        add_not_empty(&mut base, "flag", json!(false));
        assert!(base.is_empty());

        add_not_empty(&mut base, "text", json!("hello"));
        assert_eq!(Value::Object(base), json!({ "text": "hello" }));
    }
}
