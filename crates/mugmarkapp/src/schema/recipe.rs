use super::{coerce_string, coerce_string_list, field, non_blank, Schema};
use crate::model::{Kind, Record, Recipe};
use crate::tags::tags_from_value;
use serde_json::Value;

pub struct RecipeSchema;

impl Schema for RecipeSchema {
    fn kind(&self) -> Kind {
        Kind::Recipes
    }

    fn label(&self) -> &'static str {
        "Recipe"
    }

    fn filename(&self) -> &'static str {
        "recipes.json"
    }

    fn hint(&self) -> &'static str {
        "Fields: id, title, image, alt?, description?, tags?, ingredients[], instructions"
    }

    fn id_prefix(&self) -> &'static str {
        "r"
    }

    fn normalize(&self, raw: &Value) -> Record {
        Record::Recipe(Recipe {
            id: coerce_string(field(raw, "id")),
            title: coerce_string(field(raw, "title")),
            image: coerce_string(field(raw, "image")),
            alt: coerce_string(field(raw, "alt")),
            description: coerce_string(field(raw, "description")),
            tags: tags_from_value(field(raw, "tags")),
            ingredients: coerce_string_list(field(raw, "ingredients")),
            instructions: coerce_string(field(raw, "instructions")),
        })
    }

    fn restore(&self, raw: Value) -> Record {
        match serde_json::from_value::<Recipe>(raw.clone()) {
            Ok(recipe) => Record::Recipe(recipe),
            Err(_) => self.normalize(&raw),
        }
    }

    fn check_required(&self, record: &Record, who: &str) -> Vec<String> {
        let mut errors = Vec::new();
        if record.image().trim().is_empty() {
            errors.push(format!("Recipe {}: missing image", who));
        }
        if let Record::Recipe(recipe) = record {
            if recipe.ingredients.iter().all(|i| i.trim().is_empty()) {
                errors.push(format!("Recipe {}: ingredients empty", who));
            }
            if recipe.instructions.trim().is_empty() {
                errors.push(format!("Recipe {}: instructions empty", who));
            }
        }
        errors
    }

    fn asset_paths(&self, record: &Record) -> Vec<String> {
        non_blank([record.image().trim().to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> Value {
        json!({
            "id": "r-1",
            "title": "Soup",
            "image": "/img/soup.png",
            "ingredients": ["water", "salt"],
            "instructions": "Boil."
        })
    }

    #[test]
    fn ingredients_are_trimmed_and_blanks_dropped() {
        let Record::Recipe(recipe) =
            RecipeSchema.normalize(&json!({"ingredients": [" salt ", "", "  ", 2]}))
        else {
            panic!("expected recipe");
        };
        assert_eq!(recipe.ingredients, vec!["salt", "2"]);
    }

    #[test]
    fn complete_recipe_validates() {
        let records = vec![RecipeSchema.normalize(&complete())];
        assert!(RecipeSchema.validate(&records).is_empty());
    }

    #[test]
    fn reports_missing_image_ingredients_and_instructions() {
        let records = vec![RecipeSchema.normalize(&json!({"id": "r-1", "title": "Soup"}))];
        assert_eq!(
            RecipeSchema.validate(&records),
            vec![
                "Recipe r-1: missing image".to_string(),
                "Recipe r-1: ingredients empty".to_string(),
                "Recipe r-1: instructions empty".to_string(),
            ]
        );
    }

    #[test]
    fn blank_ingredient_rows_count_as_empty() {
        let mut record = RecipeSchema.normalize(&complete());
        if let Record::Recipe(recipe) = &mut record {
            recipe.ingredients = vec!["".into(), "  ".into()];
        }
        assert_eq!(
            RecipeSchema.validate(&[record]),
            vec!["Recipe r-1: ingredients empty".to_string()]
        );
    }

    #[test]
    fn asset_paths_are_thumbnail_only() {
        let record = RecipeSchema.normalize(&complete());
        assert_eq!(RecipeSchema.asset_paths(&record), vec!["/img/soup.png"]);
        let blank = RecipeSchema.blank("r-2");
        assert!(RecipeSchema.asset_paths(&blank).is_empty());
    }
}
