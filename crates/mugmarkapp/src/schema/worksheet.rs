use super::{coerce_string, coerce_string_list, field, non_blank, Schema};
use crate::model::{FileLink, Kind, Record, Worksheet};
use crate::tags::tags_from_value;
use serde_json::Value;

pub struct WorksheetSchema;

impl WorksheetSchema {
    fn file_link(raw: &Value) -> FileLink {
        FileLink {
            label: coerce_string(field(raw, "label")),
            url: coerce_string(field(raw, "url")),
        }
    }

    fn thumbnail(raw: &Value) -> String {
        // Older exports used `thumbnail` before `image` was standardized.
        match field(raw, "image") {
            Some(value) if !value.is_null() => coerce_string(Some(value)),
            _ => coerce_string(field(raw, "thumbnail")),
        }
    }
}

impl Schema for WorksheetSchema {
    fn kind(&self) -> Kind {
        Kind::Worksheets
    }

    fn label(&self) -> &'static str {
        "Worksheet"
    }

    fn filename(&self) -> &'static str {
        "worksheets.json"
    }

    fn hint(&self) -> &'static str {
        "Fields: id, title, image (thumb), images[], description, tags[], files[{label,url}]"
    }

    fn id_prefix(&self) -> &'static str {
        "w"
    }

    fn normalize(&self, raw: &Value) -> Record {
        let files = match field(raw, "files") {
            Some(Value::Array(items)) => items.iter().map(Self::file_link).collect(),
            _ => Vec::new(),
        };

        Record::Worksheet(Worksheet {
            id: coerce_string(field(raw, "id")),
            title: coerce_string(field(raw, "title")),
            image: Self::thumbnail(raw),
            images: coerce_string_list(field(raw, "images")),
            description: coerce_string(field(raw, "description")),
            tags: tags_from_value(field(raw, "tags")),
            files,
        })
    }

    fn restore(&self, raw: Value) -> Record {
        match serde_json::from_value::<Worksheet>(raw.clone()) {
            Ok(worksheet) => Record::Worksheet(worksheet),
            Err(_) => self.normalize(&raw),
        }
    }

    fn check_required(&self, record: &Record, who: &str) -> Vec<String> {
        if record.image().trim().is_empty() {
            vec![format!("Worksheet {}: missing thumbnail image", who)]
        } else {
            Vec::new()
        }
    }

    fn asset_paths(&self, record: &Record) -> Vec<String> {
        let Record::Worksheet(ws) = record else {
            return non_blank([record.image().trim().to_string()]);
        };
        let paths = std::iter::once(ws.image.trim().to_string())
            .chain(ws.images.iter().map(|p| p.trim().to_string()))
            .chain(ws.files.iter().map(|f| f.url.trim().to_string()));
        non_blank(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(raw: Value) -> Worksheet {
        match WorksheetSchema.normalize(&raw) {
            Record::Worksheet(ws) => ws,
            other => panic!("expected worksheet, got {:?}", other),
        }
    }

    #[test]
    fn fills_every_field_from_minimal_input() {
        let ws = normalize(json!({"id": "w-1", "title": "Colors", "image": "/img/w1.png"}));
        assert_eq!(ws.id, "w-1");
        assert_eq!(ws.title, "Colors");
        assert_eq!(ws.image, "/img/w1.png");
        assert!(ws.images.is_empty());
        assert!(ws.files.is_empty());
        assert!(ws.tags.is_empty());
        assert_eq!(ws.description, "");
    }

    #[test]
    fn falls_back_to_legacy_thumbnail() {
        let ws = normalize(json!({"thumbnail": " /t.png "}));
        assert_eq!(ws.image, "/t.png");

        let ws = normalize(json!({"image": null, "thumbnail": "/t.png"}));
        assert_eq!(ws.image, "/t.png");

        let ws = normalize(json!({"image": "/i.png", "thumbnail": "/t.png"}));
        assert_eq!(ws.image, "/i.png");
    }

    #[test]
    fn files_keep_position_and_coerce_entries() {
        let ws = normalize(json!({
            "files": [{"label": " PDF ", "url": "/a.pdf"}, "junk", {"url": 5}]
        }));
        assert_eq!(
            ws.files,
            vec![
                FileLink { label: "PDF".into(), url: "/a.pdf".into() },
                FileLink::default(),
                FileLink { label: "".into(), url: "5".into() },
            ]
        );
    }

    #[test]
    fn non_array_lists_become_empty() {
        let ws = normalize(json!({"images": "/a.png", "files": {"url": "/x"}}));
        assert!(ws.images.is_empty());
        assert!(ws.files.is_empty());
    }

    #[test]
    fn requires_thumbnail() {
        let records = vec![WorksheetSchema.normalize(&json!({"id": "w-1", "title": "T"}))];
        assert_eq!(
            WorksheetSchema.validate(&records),
            vec!["Worksheet w-1: missing thumbnail image".to_string()]
        );
    }

    #[test]
    fn asset_paths_cover_thumbnail_gallery_and_files() {
        let record = WorksheetSchema.normalize(&json!({
            "image": "/img/t.png",
            "images": ["/img/g1.png", "/img/t.png"],
            "files": [{"label": "PDF", "url": "/files/a.pdf"}, {"label": "empty", "url": ""}]
        }));
        assert_eq!(
            WorksheetSchema.asset_paths(&record),
            vec!["/img/t.png", "/img/g1.png", "/img/t.png", "/files/a.pdf"]
        );
    }

    #[test]
    fn restore_keeps_blank_rows() {
        let raw = json!({"id": "w-1", "images": ["", "/a.png"], "files": [{"label": "", "url": ""}]});
        let Record::Worksheet(ws) = WorksheetSchema.restore(raw) else {
            panic!("expected worksheet");
        };
        assert_eq!(ws.images, vec!["", "/a.png"]);
        assert_eq!(ws.files.len(), 1);
    }

    #[test]
    fn restore_falls_back_to_normalize_on_bad_shape() {
        let raw = json!({"id": 7, "tags": "a, b"});
        let Record::Worksheet(ws) = WorksheetSchema.restore(raw) else {
            panic!("expected worksheet");
        };
        assert_eq!(ws.id, "7");
        assert_eq!(ws.tags, vec!["a", "b"]);
    }
}
