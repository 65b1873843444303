use serde_json::{Map, Value};
use taal_api::{TaalResult, TranslatableString};

use crate::repository::translator::Translator;

/// Replaces every translatable reference in `data` with the translator's
/// value. References nested in arrays and objects are replaced too.
///
/// Returns the number of references replaced.
pub async fn translate_serialized(
    translator: &dyn Translator,
    data: &mut Map<String, Value>,
) -> TaalResult<usize> {
    let mut pointers = Vec::new();
    for (key, value) in data.iter() {
        collect_references(value, format!("/{}", escape_pointer(key)), &mut pointers);
    }

    let mut translated = 0;
    for (pointer, translatable) in pointers {
        let text = translator.translate(&translatable).await?;
        if let Some(slot) = pointer_mut(data, &pointer) {
            *slot = Value::String(text);
            translated += 1;
        }
    }
    Ok(translated)
}

fn collect_references(value: &Value, pointer: String, out: &mut Vec<(String, TranslatableString)>) {
    if let Some(translatable) = TranslatableString::from_reference(value) {
        out.push((pointer, translatable));
        return;
    }
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                collect_references(item, format!("{pointer}/{i}"), out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                collect_references(item, format!("{pointer}/{}", escape_pointer(key)), out);
            }
        }
        _ => {}
    }
}

fn pointer_mut<'a>(data: &'a mut Map<String, Value>, pointer: &str) -> Option<&'a mut Value> {
    let rest = pointer.strip_prefix('/')?;
    let (head, tail) = match rest.find('/') {
        Some(pos) => (&rest[..pos], &rest[pos..]),
        None => (rest, ""),
    };
    let value = data.get_mut(&unescape_pointer(head))?;
    if tail.is_empty() {
        Some(value)
    } else {
        value.pointer_mut(tail)
    }
}

fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

fn unescape_pointer(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}
