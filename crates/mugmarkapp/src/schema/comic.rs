use super::{coerce_string, coerce_string_list, field, non_blank, Schema};
use crate::model::{Comic, Dictionary, Kind, Record};
use crate::tags::tags_from_value;
use serde_json::Value;

pub struct ComicSchema;

impl ComicSchema {
    /// Only JSON objects produce a dictionary, and an all-empty one collapses to `None`.
    fn dictionary(raw: Option<&Value>) -> Option<Dictionary> {
        let dict = raw.filter(|v| v.is_object())?;
        let dictionary = Dictionary {
            term: coerce_string(field(dict, "term")),
            phonetic: coerce_string(field(dict, "phonetic")),
            pos: coerce_string(field(dict, "pos")),
            definitions: coerce_string_list(field(dict, "definitions")),
        };
        if dictionary.is_empty() {
            None
        } else {
            Some(dictionary)
        }
    }
}

impl Schema for ComicSchema {
    fn kind(&self) -> Kind {
        Kind::Comics
    }

    fn label(&self) -> &'static str {
        "Comic"
    }

    fn filename(&self) -> &'static str {
        "comics.json"
    }

    fn hint(&self) -> &'static str {
        "Fields: id, title, image, alt?, description?, tags?, dictionary{term,phonetic,pos,definitions[]}"
    }

    fn id_prefix(&self) -> &'static str {
        "c"
    }

    fn normalize(&self, raw: &Value) -> Record {
        Record::Comic(Comic {
            id: coerce_string(field(raw, "id")),
            title: coerce_string(field(raw, "title")),
            image: coerce_string(field(raw, "image")),
            alt: coerce_string(field(raw, "alt")),
            description: coerce_string(field(raw, "description")),
            tags: tags_from_value(field(raw, "tags")),
            dictionary: Self::dictionary(field(raw, "dictionary")),
        })
    }

    fn restore(&self, raw: Value) -> Record {
        match serde_json::from_value::<Comic>(raw.clone()) {
            Ok(comic) => Record::Comic(comic),
            Err(_) => self.normalize(&raw),
        }
    }

    fn check_required(&self, record: &Record, who: &str) -> Vec<String> {
        if record.image().trim().is_empty() {
            vec![format!("Comic {}: missing image", who)]
        } else {
            Vec::new()
        }
    }

    fn asset_paths(&self, record: &Record) -> Vec<String> {
        non_blank([record.image().trim().to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dictionary_of(raw: Value) -> Option<Dictionary> {
        match ComicSchema.normalize(&raw) {
            Record::Comic(comic) => comic.dictionary,
            other => panic!("expected comic, got {:?}", other),
        }
    }

    #[test]
    fn dictionary_fields_are_normalized() {
        let dict = dictionary_of(json!({
            "dictionary": {"term": " mug ", "pos": "noun", "definitions": [" a cup ", "", null]}
        }))
        .unwrap();
        assert_eq!(dict.term, "mug");
        assert_eq!(dict.phonetic, "");
        assert_eq!(dict.pos, "noun");
        assert_eq!(dict.definitions, vec!["a cup"]);
    }

    #[test]
    fn empty_dictionary_collapses_to_none() {
        assert_eq!(dictionary_of(json!({"dictionary": {}})), None);
        assert_eq!(
            dictionary_of(json!({"dictionary": {"term": "  ", "definitions": ["", " "]}})),
            None
        );
    }

    #[test]
    fn non_object_dictionary_is_none() {
        assert_eq!(dictionary_of(json!({"dictionary": "mug"})), None);
        assert_eq!(dictionary_of(json!({"dictionary": ["mug"]})), None);
        assert_eq!(dictionary_of(json!({"dictionary": null})), None);
        assert_eq!(dictionary_of(json!({})), None);
    }

    #[test]
    fn requires_image() {
        let records = vec![ComicSchema.normalize(&json!({"id": "c-1", "title": "Strip"}))];
        assert_eq!(
            ComicSchema.validate(&records),
            vec!["Comic c-1: missing image".to_string()]
        );
    }

    #[test]
    fn restore_keeps_blank_definition_rows() {
        let raw = json!({"id": "c-1", "dictionary": {"term": "", "phonetic": "", "pos": "", "definitions": [""]}});
        let Record::Comic(comic) = ComicSchema.restore(raw) else {
            panic!("expected comic");
        };
        assert_eq!(comic.dictionary.unwrap().definitions, vec![""]);
    }
}
