use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::QueryArgs;
use crate::content::{DocRoute, Document};
use crate::log;

pub(super) fn output_results(docs: &[&Document], args: &QueryArgs) -> Result<()> {
    let output = format_results(docs, args.fields.as_deref(), args.filter_empty)?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// One object per document, `url` first.
///
/// With `fields`, only those keys are kept, in the requested order; a
/// requested key the document lacks shows as `null` unless filtered.
fn format_results(
    docs: &[&Document],
    fields: Option<&[String]>,
    filter_empty: bool,
) -> Result<JsonValue> {
    let pages = docs
        .iter()
        .map(|doc| format_document(doc, fields, filter_empty))
        .collect::<Result<Vec<_>>>()?;
    Ok(JsonValue::Array(pages))
}

fn format_document(
    doc: &Document,
    fields: Option<&[String]>,
    filter_empty: bool,
) -> Result<JsonValue> {
    let mut obj = Map::new();
    let url = DocRoute::from_slug(&doc.slug).public_path();
    obj.insert("url".to_string(), JsonValue::String(url));

    let JsonValue::Object(mut doc_obj) = serde_json::to_value(doc)? else {
        return Ok(JsonValue::Object(obj));
    };

    match fields {
        Some(fields) => {
            for field in fields {
                match doc_obj.remove(field) {
                    Some(value) if !filter_empty || !is_empty_value(&value) => {
                        obj.insert(field.clone(), value);
                    }
                    Some(_) => {}
                    None if !filter_empty => {
                        obj.insert(field.clone(), JsonValue::Null);
                    }
                    None => {}
                }
            }
        }
        None => {
            for (key, value) in doc_obj {
                if !filter_empty || !is_empty_value(&value) {
                    obj.insert(key, value);
                }
            }
        }
    }

    Ok(JsonValue::Object(obj))
}

/// Check if a JSON value is considered "empty" (null, "", or [])
fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Slug;
    use crate::sanitize::RawHtml;
    use serde_json::json;

    fn doc() -> Document {
        Document {
            slug: Slug::new("blog", "zh", "post"),
            content_type: "blog".into(),
            locale: "zh".into(),
            title: "Post".into(),
            description: String::new(),
            created_at: "2024-03-01".into(),
            updated_at: String::new(),
            tags: vec![],
            author: String::new(),
            content: RawHtml::new("<p>x</p>"),
            headings: vec![],
        }
    }

    #[test]
    fn test_full_document_url_first() {
        let out = format_results(&[&doc()], None, false).unwrap();
        let obj = out[0].as_object().unwrap();
        assert_eq!(obj.keys().next().map(String::as_str), Some("url"));
        assert_eq!(obj["url"], "/zh/blog/post");
        assert_eq!(obj["type"], "blog");
        assert_eq!(obj["tags"], json!([]));
    }

    #[test]
    fn test_filter_empty() {
        let out = format_results(&[&doc()], None, true).unwrap();
        let obj = out[0].as_object().unwrap();
        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("tags"));
        assert_eq!(obj["createdAt"], "2024-03-01");
    }

    #[test]
    fn test_field_selection() {
        let fields = vec!["title".to_string(), "nope".to_string(), "author".to_string()];
        let out = format_results(&[&doc()], Some(&fields), false).unwrap();
        assert_eq!(
            out[0],
            json!({"url": "/zh/blog/post", "title": "Post", "nope": null, "author": ""})
        );

        let out = format_results(&[&doc()], Some(&fields), true).unwrap();
        assert_eq!(out[0], json!({"url": "/zh/blog/post", "title": "Post"}));
    }

    #[test]
    fn test_no_documents_is_empty_array() {
        assert_eq!(format_results(&[], None, false).unwrap(), json!([]));
    }
}
